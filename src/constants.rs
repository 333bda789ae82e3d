/// Canonical address/geography terms and the surface forms accepted in their place.
///
/// Keys are lowercase; surface forms are matched case-insensitively and every
/// entry carries at least one form.
pub const ALTERNATION_TABLE: &[(&str, &[&str])] = &[
    ("center", &["Center", "Ctr", "Cntr"]),
    ("valley", &["Valley", "Vly"]),
    ("mountain", &["Mountain", "Mtn"]),
    ("heights", &["Heights", "Hts", "Hgts"]),
    ("parkway", &["Parkway", "Pkwy"]),
    ("boulevard", &["Boulevard", "Blvd"]),
    ("road", &["Road", "Rd"]),
    ("drive", &["Drive", "Dr"]),
    ("street", &["Street", "St"]),
    ("avenue", &["Avenue", "Ave"]),
    ("terrace", &["Terrace", "Ter", "Terr"]),
    ("place", &["Place", "Pl"]),
    ("court", &["Court", "Ct"]),
    ("square", &["Square", "Sq"]),
    ("village", &["Village", "Vlg", "Vill"]),
    ("commons", &["Commons", "Cmns"]),
    ("harbor", &["Harbor", "Hbr"]),
    ("fort", &["Fort", "Ft"]),
    ("point", &["Point", "Pt"]),
    ("mount", &["Mount", "Mt"]),
    ("saint", &["Saint", "St"]),
    ("sainte", &["Sainte", "Ste"]),
    (
        "international",
        &["International", "Intl", "Int\u{2019}l", "Int'l"],
    ),
    ("university", &["University", "Univ", "U"]),
    ("industrial", &["Industrial", "Ind", "Indust"]),
    ("business", &["Business"]),
    ("district", &["District", "Dist"]),
    ("cbd", &["CBD", "Central Business District"]),
    ("north", &["North", "N"]),
    ("south", &["South", "S"]),
    ("east", &["East", "E"]),
    ("west", &["West", "W"]),
    ("county", &["County", "Co", "Cnty"]),
    ("and", &["and", "&"]),
];

/// Terms which must never be dropped as filler when shortening a name.
pub const PROTECTED_TERMS: &[&str] = &["street", "saint", "sainte"];

/// Any run of whitespace, hyphens or slashes (including none) between submarket tokens.
pub const SUBMARKET_TOKEN_SEPARATOR: &str = r"[\s\-/]*";

pub const SUBMARKET_TOKEN_PATTERN: &str = r"[A-Za-z0-9]+|&|[A-Za-z]+'[A-Za-z]+";

/// Phrase identifying the page which lists the report's submarket.
pub const SUBMARKET_CLUSTER_MARKER: &str = "Submarket Cluster";

/// Words following "Submarket " on the cluster page which mark a heading rather than a name.
/// Labels starting with a digit (`3 Star`, `12`) are skipped as well.
pub const SUBMARKET_LABEL_EXCLUSIONS: &[&str] = &["Cluster", "SF", "Sales", "Leasing"];

/// Label of the vacant square footage line on the first page.
pub const VACANT_LABEL: &str = "Vacant";

/// Property kinds which qualify a "Type ... Star ..." line.
pub const REPORT_PROPERTY_KINDS: &[&str] = &["Industrial", "Retail", "Office", "Flex"];

/// Words which end the property type on a "Star" line.
pub const PROPERTY_TYPE_TERMINATORS: &[&str] =
    &["%", "Rent", "Vacant", "Vacancy", "Sign", "Subject"];

/// Words following "Market " on a line which mark a statistic label rather than a market name.
pub const MARKET_LINE_LABELS: &[&str] = &["Asking", "Rent", "Sale", "Sales", "Vacancy", "Cap"];

pub const FULLY_LEASED_ASKING_RENT: &str = "Fully leased building";

/// Hyphen variants normalized to an ASCII hyphen in geography names.
pub const HYPHEN_VARIANTS: &[char] = &['\u{2013}', '\u{2014}', '\u{2011}'];

pub const DEFAULT_GEOGRAPHY_COLUMN: &str = "Geography Name";

/// Output column order of the rollup CSV.
pub const COLUMN_ORDER: &[&str] = &[
    "address",
    "Class",
    "RBA",
    "Building Vacancy %",
    "Asking Rent",
    "Landlord",
    "Lease Expiration",
    "% Occupied",
    "Occupied SF",
    "Current Rent",
    "Existing Buildings",
    "Inventory SF",
    "Vacancy Rate",
    "Net Absorption SF 12 Mo",
    "Net Delivered SF 12 Mo",
    "Market Asking Rent/SF",
    "city",
    "state",
    "submarket",
];

pub const DEFAULT_EXCLUDED_COLUMNS: &[&str] = &[
    "location",
    "Geography Name",
    "Property Class Name",
    "Period",
    "Slice",
    "As Of",
];

// Reference columns which receive accounting-style square footage formatting.
pub const SIGNED_SQUARE_FOOT_COLUMNS: &[&str] =
    &["Net Absorption SF 12 Mo", "Net Delivered SF 12 Mo"];

pub const INVENTORY_COLUMN: &str = "Inventory SF";

pub const MARKET_ASKING_RENT_COLUMN: &str = "Market Asking Rent/SF";

// Overview record field names.
pub const FIELD_ADDRESS: &str = "address";
pub const FIELD_CITY: &str = "city";
pub const FIELD_STATE: &str = "state";
pub const FIELD_RBA: &str = "RBA";
pub const FIELD_CLASS: &str = "Class";
pub const FIELD_OCCUPIED_SF: &str = "Occupied SF";
pub const FIELD_PERCENT_OCCUPIED: &str = "% Occupied";
pub const FIELD_BUILDING_VACANCY: &str = "Building Vacancy %";
pub const FIELD_ASKING_RENT: &str = "Asking Rent";
pub const FIELD_LANDLORD: &str = "Landlord";
pub const FIELD_LEASE_EXPIRATION: &str = "Lease Expiration";
pub const FIELD_CURRENT_RENT: &str = "Current Rent";
pub const FIELD_SUBMARKET: &str = "submarket";
pub const FIELD_LOCATION: &str = "location";
