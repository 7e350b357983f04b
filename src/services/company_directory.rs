//! Company name to ticker lookup.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("failed to read directory file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid directory file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Injectable name → ticker mapping. Lookups ignore case and surrounding
/// whitespace.
#[derive(Debug, Clone)]
pub struct CompanyDirectory {
    entries: HashMap<String, (String, String)>,
}

const DEFAULT_COMPANIES: &[(&str, &str)] = &[
    ("Apple", "AAPL"),
    ("Microsoft", "MSFT"),
    ("Amazon", "AMZN"),
    ("Alphabet Class A", "GOOGL"),
    ("Alphabet Class C", "GOOG"),
    ("Tesla", "TSLA"),
    ("NVIDIA", "NVDA"),
    ("Meta Platforms", "META"),
    ("PayPal", "PYPL"),
    ("Intel", "INTC"),
    ("Netflix", "NFLX"),
    ("Adobe", "ADBE"),
    ("Booking Holdings", "BKNG"),
    ("Cisco Systems", "CSCO"),
    ("Comcast", "CMCSA"),
    ("Broadcom", "AVGO"),
    ("Qualcomm", "QCOM"),
    ("PepsiCo", "PEP"),
    ("Amgen", "AMGN"),
    ("T-Mobile US", "TMUS"),
    ("Illumina", "ILMN"),
    ("Starbucks", "SBUX"),
    ("Applied Materials", "AMAT"),
    ("KLA Corporation", "KLAC"),
    ("Charter Communications", "CHTR"),
    ("Gilead Sciences", "GILD"),
    ("Regeneron Pharmaceuticals", "REGN"),
    ("Vertex Pharmaceuticals", "VRTX"),
    ("Intuit", "INTU"),
    ("Cadence Design Systems", "CDNS"),
    ("Biogen", "BIIB"),
    ("Moderna", "MRNA"),
    ("Paychex", "PAYX"),
    ("Salesforce", "CRM"),
    ("Align Technology", "ALGN"),
    ("Fortinet", "FTNT"),
    ("Advanced Micro Devices", "AMD"),
    ("DocuSign", "DOCU"),
    ("Palo Alto Networks", "PANW"),
    ("CrowdStrike", "CRWD"),
    ("Twilio", "TWLO"),
    ("Nokia", "NOK"),
    ("Asana", "ASAN"),
    ("Johnson & Johnson", "JNJ"),
    ("JPMorgan Chase", "JPM"),
    ("Berkshire Hathaway", "BRK.B"),
    ("Visa", "V"),
    ("Walmart", "WMT"),
    ("UnitedHealth Group", "UNH"),
    ("Exxon Mobil", "XOM"),
    ("Coca-Cola", "KO"),
    ("Procter & Gamble", "PG"),
    ("AbbVie", "ABBV"),
    ("Home Depot", "HD"),
    ("Goldman Sachs", "GS"),
    ("American Express", "AXP"),
    ("McDonald's", "MCD"),
    ("Disney", "DIS"),
    ("3M", "MMM"),
    ("Pfizer", "PFE"),
    ("CVS Health", "CVS"),
    ("Verizon", "VZ"),
    ("AT&T", "T"),
    ("Lowe's", "LOW"),
    ("Bristol-Myers Squibb", "BMY"),
    ("Abbott Laboratories", "ABT"),
    ("Chevron", "CVX"),
    ("IBM", "IBM"),
    ("Union Pacific", "UNP"),
    ("Lockheed Martin", "LMT"),
    ("Nike", "NKE"),
    ("Travelers", "TRV"),
];

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl CompanyDirectory {
    pub fn from_entries<I, N, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(name, ticker)| {
                let name = name.into();
                (normalize(&name), (name, ticker.into()))
            })
            .collect();
        Self { entries }
    }

    /// Load a JSON object of `{"Company Name": "TICKER"}` pairs.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path)?;
        let map: HashMap<String, String> = serde_json::from_str(&raw)?;
        Ok(Self::from_entries(map))
    }

    /// Returns the canonical company name and its ticker.
    pub fn lookup(&self, name: &str) -> Option<(&str, &str)> {
        self.entries
            .get(&normalize(name))
            .map(|(name, ticker)| (name.as_str(), ticker.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CompanyDirectory {
    fn default() -> Self {
        Self::from_entries(DEFAULT_COMPANIES.iter().copied())
    }
}
