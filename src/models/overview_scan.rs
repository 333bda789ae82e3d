use crate::constants::{
    FIELD_ADDRESS, FIELD_ASKING_RENT, FIELD_BUILDING_VACANCY, FIELD_CITY, FIELD_CLASS,
    FIELD_CURRENT_RENT, FIELD_LANDLORD, FIELD_LEASE_EXPIRATION, FIELD_LOCATION,
    FIELD_OCCUPIED_SF, FIELD_PERCENT_OCCUPIED, FIELD_RBA, FIELD_STATE, FIELD_SUBMARKET,
    FULLY_LEASED_ASKING_RENT, MARKET_LINE_LABELS, PROPERTY_TYPE_TERMINATORS,
    REPORT_PROPERTY_KINDS, VACANT_LABEL,
};
use crate::models::{DocumentId, OverviewRecord};
use crate::types::{OverviewFields, SquareFeet};
use crate::utils::{format_decimal, format_thousands, round_to};
use crate::Error;
use regex::Regex;
use std::sync::LazyLock;

static CITY_STATE_ZIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?),\s*([A-Z]{2})\s+(\d{5}(?:-\d{4})?)").expect("valid city/state pattern")
});

static RBA_AREA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"RBA\s+([\d,]+)\s+SF").expect("valid RBA pattern"));

static GLA_AREA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GLA\s+([\d,]+)\s+SF").expect("valid GLA pattern"));

static PROPERTY_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    let terminators: Vec<String> = PROPERTY_TYPE_TERMINATORS
        .iter()
        .map(|terminator| regex::escape(terminator))
        .collect();

    Regex::new(&format!(r"Star\s+(.*?)\s*(?:{})", terminators.join("|")))
        .expect("valid property type pattern")
});

// Comma-grouped figures, or a bare run of digits
static VACANT_AREA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,3}(?:,\d{3})+|\d+)\s*SF\b").expect("valid vacancy pattern")
});

static CLASS_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bClass\s+([A-Z])\b").expect("valid class pattern"));

static MARKET_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Market\s+(?P<market>.+?)(?:\s+Submarket\b.*)?$").expect("valid market pattern")
});

/// Single-pass accumulator over the lines of a report's first page.
///
/// Each rule reads one line (plus the following line for ownership) and
/// writes only its own fields. Where two rules feed the same output, the
/// priority is explicit: a GLA figure always takes precedence over an RBA figure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewScan {
    pub city: Option<String>,
    pub state: Option<String>,
    pub market: Option<String>,
    /// Last `RBA <n> SF` figure seen.
    pub rba_area: Option<SquareFeet>,
    /// Last `GLA <n> SF` figure seen.
    pub gla_area: Option<SquareFeet>,
    pub landlord: Option<String>,
    pub property_type: Option<String>,
    pub class: Option<String>,
    /// Last vacant figure seen; zero when the report lists none.
    pub vacant_square_feet: SquareFeet,
    pub asking_rent: Option<String>,
    pub service_type: Option<String>,
}

impl OverviewScan {
    pub fn scan<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut scan = Self::default();

        for (idx, line) in lines.iter().enumerate() {
            let next_line = lines.get(idx + 1).map(|next| next.as_ref());
            scan.apply_line(line.as_ref(), next_line);
        }

        scan
    }

    /// Applies every rule to a single line. Rules are independent; a line may
    /// satisfy several of them.
    pub fn apply_line(&mut self, line: &str, next_line: Option<&str>) {
        self.apply_city_state(line);
        self.apply_market(line);
        self.apply_building_area(line);
        self.apply_ownership(line, next_line);
        self.apply_property_type(line);
        self.apply_vacancy(line);
        // Runs after the property type rule so a line carrying both uses the fresh type
        self.apply_class(line);
        self.apply_asking_rent(line);
        self.apply_service_type(line);
    }

    /// GLA takes precedence over RBA.
    pub fn building_area(&self) -> Option<SquareFeet> {
        self.gla_area.or(self.rba_area)
    }

    fn apply_city_state(&mut self, line: &str) {
        if self.city.is_some() {
            return;
        }

        if let Some(captures) = CITY_STATE_ZIP.captures(line) {
            self.city = Some(captures[1].to_string());
            self.state = Some(captures[2].to_string());
        }
    }

    fn apply_market(&mut self, line: &str) {
        if self.market.is_some() {
            return;
        }

        let Some(captures) = MARKET_NAME.captures(line) else {
            return;
        };

        let market = captures["market"].trim();
        let first_word = market.split_whitespace().next().unwrap_or("");

        if !MARKET_LINE_LABELS.contains(&first_word) {
            self.market = Some(market.to_string());
        }
    }

    fn apply_building_area(&mut self, line: &str) {
        if line.contains("RBA") {
            if let Some(area) = Self::capture_square_feet(&RBA_AREA, line) {
                self.rba_area = Some(area);
            }
        }

        if line.contains("GLA") {
            if let Some(area) = Self::capture_square_feet(&GLA_AREA, line) {
                self.gla_area = Some(area);
            }
        }
    }

    fn apply_ownership(&mut self, line: &str, next_line: Option<&str>) {
        if !line.contains("Recorded Owner") {
            return;
        }

        let true_owner = next_line
            .filter(|next| next.contains("True Owner"))
            .and_then(|next| next.split("True Owner ").nth(1));

        let owner = true_owner.or_else(|| line.split("Recorded Owner ").nth(1));

        if let Some(owner) = owner {
            self.landlord = Some(owner.to_string());
        }
    }

    fn apply_property_type(&mut self, line: &str) {
        let already_captured = self
            .property_type
            .as_deref()
            .map_or(false, |property_type| !property_type.is_empty());

        if already_captured || !line.contains("Type") || !line.contains("Star") {
            return;
        }

        if !REPORT_PROPERTY_KINDS.iter().any(|kind| line.contains(kind)) {
            return;
        }

        let property_type = match PROPERTY_TYPE.captures(line) {
            Some(captures) => Some(captures[1].to_string()),
            None => line.split("Star ").nth(1).map(|rest| rest.to_string()),
        };

        if property_type.is_some() {
            self.property_type = property_type;
        }
    }

    fn apply_vacancy(&mut self, line: &str) {
        if !line.contains(VACANT_LABEL) {
            return;
        }

        if let Some(vacant) = Self::capture_square_feet(&VACANT_AREA, line) {
            self.vacant_square_feet = vacant;
        }
    }

    fn apply_class(&mut self, line: &str) {
        if !line.contains("Class") {
            return;
        }

        if let Some(captures) = CLASS_LETTER.captures(line) {
            let property_type = self.property_type.as_deref().unwrap_or("");
            self.class = Some(format!("{} - {}", &captures[1], property_type));
        }
    }

    fn apply_asking_rent(&mut self, line: &str) {
        if !line.contains("Rent $") {
            return;
        }

        if let Some(rent) = line.split("Rent ").nth(1) {
            self.asking_rent = Some(rent.to_string());
        }
    }

    fn apply_service_type(&mut self, line: &str) {
        if !line.contains("Service Type") {
            return;
        }

        if let Some(service) = line.split("Service Type ").nth(1) {
            self.service_type = Some(service.to_string());
        }
    }

    fn capture_square_feet(regex: &Regex, line: &str) -> Option<SquareFeet> {
        let captures = regex.captures(line)?;
        captures[1].replace(',', "").parse().ok()
    }

    /// Derives the formatted occupancy, vacancy, size and rent fields.
    ///
    /// Fails when no positive building area was found, or when a service type
    /// was listed without an asking rent.
    pub fn finalize(
        self,
        document_id: &DocumentId,
        submarket: &str,
        placeholder_value: &str,
    ) -> Result<OverviewRecord, Error> {
        let building_area = self
            .building_area()
            .filter(|area| *area > 0)
            .ok_or(Error::MissingBuildingArea)?;

        let vacant = self.vacant_square_feet;

        let signed_building_area = to_signed(FIELD_RBA, building_area)?;
        let signed_vacant = to_signed(VACANT_LABEL, vacant)?;

        let vacancy_percent = round_to(vacant as f64 / building_area as f64 * 100.0, 2);
        let occupied_percent = round_to(100.0 - vacancy_percent, 2);
        let occupied_square_feet = signed_building_area - signed_vacant;

        let service_type = self.service_type.filter(|service| !service.is_empty());
        let asking_rent = match (service_type, self.asking_rent) {
            (Some(service), Some(rent)) => format!("{} PSF {}", rent, service),
            (Some(_), None) => return Err(Error::MissingField(FIELD_ASKING_RENT)),
            (None, _) => FULLY_LEASED_ASKING_RENT.to_string(),
        };

        let location = format!(
            "{} USA : {}",
            self.state.as_deref().unwrap_or(""),
            submarket
        );

        let mut fields = OverviewFields::new();
        fields.insert(FIELD_ADDRESS.into(), Some(document_id.address.clone()));
        fields.insert(FIELD_CITY.into(), self.city);
        fields.insert(FIELD_STATE.into(), self.state);
        fields.insert(
            FIELD_RBA.into(),
            Some(format_thousands(signed_building_area)),
        );
        fields.insert(FIELD_CLASS.into(), self.class);
        fields.insert(
            FIELD_OCCUPIED_SF.into(),
            Some(format!("{} SF", occupied_square_feet)),
        );
        fields.insert(
            FIELD_PERCENT_OCCUPIED.into(),
            Some(format!("{}%", format_decimal(occupied_percent))),
        );
        fields.insert(
            FIELD_BUILDING_VACANCY.into(),
            Some(format!("{} %", format_decimal(vacancy_percent))),
        );
        fields.insert(FIELD_ASKING_RENT.into(), Some(asking_rent));
        fields.insert(FIELD_LANDLORD.into(), self.landlord);
        fields.insert(
            FIELD_LEASE_EXPIRATION.into(),
            Some(placeholder_value.to_string()),
        );
        fields.insert(
            FIELD_CURRENT_RENT.into(),
            Some(placeholder_value.to_string()),
        );
        fields.insert(FIELD_SUBMARKET.into(), Some(submarket.to_string()));
        fields.insert(FIELD_LOCATION.into(), Some(location));

        Ok(OverviewRecord::new(
            fields,
            self.property_type.unwrap_or_default(),
            building_area,
            vacant,
        ))
    }
}

fn to_signed(field: &'static str, value: SquareFeet) -> Result<i64, Error> {
    i64::try_from(value).map_err(|_| Error::SquareFootageOutOfRange { field, value })
}
