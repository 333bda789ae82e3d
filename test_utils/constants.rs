use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_DATA_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_data_files"));

pub static OFFICE_REFERENCE_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_data_files", "OfficeSubmarkets.csv"));

pub static RETAIL_REFERENCE_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_data_files", "RetailSubmarkets.csv"));

pub static INDUSTRIAL_REFERENCE_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_data_files", "IndustrialSubmarkets.csv"));

pub const GEOGRAPHY_COLUMN: &str = "Geography Name";

/// First page of a well-formed office report.
pub const OFFICE_FIRST_PAGE: &str = "\
Property Summary
100 Main St
Dallas, TX 75201
Market Vacancy 9.8%
Market Dallas-Fort Worth
Building Type 4 Star Office Subject Property
Class B
RBA 100,000 SF
Vacant 15,000 SF
Recorded Owner Acme Holdings LLC
True Owner Acme Capital
Asking Rent $25.00/SF
Service Type Full Service
";

/// Cluster page listing the office report's submarket on one line.
pub const OFFICE_CLUSTER_PAGE: &str = "\
Submarket Cluster
Buildings Inventory Vacancy
Dallas-Fort Worth - North Dallas 12 1,204,331 5.4%
";

/// Cluster page whose submarket name wraps onto a second line.
pub const WRAPPED_CLUSTER_PAGE: &str = "\
Submarket Cluster
Dallas-Fort Worth - Las Colinas 38 1,204,331 21.7%
Urban Center Submarket
";

/// Cluster page naming the submarket by label, without a market listing.
pub const LABELED_CLUSTER_PAGE: &str = "\
Submarket Cluster
Submarket 3 Star Buildings 12
Submarket Las Colinas
";

/// First page of an office report which names no market.
pub const NO_MARKET_FIRST_PAGE: &str = "\
Dallas, TX 75201
Building Type 4 Star Office Subject Property
RBA 100,000 SF
";

/// First page of a report which lists no building area.
pub const MISSING_AREA_FIRST_PAGE: &str = "\
9 Elm St
Dallas, TX 75204
Market Dallas-Fort Worth
Building Type 3 Star Office Subject Property
Vacant 2,000 SF
";
