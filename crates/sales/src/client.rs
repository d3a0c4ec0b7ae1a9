use serde::{Deserialize, Serialize};

/// Client classification driving the discount percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientCategory {
    Regular,
    Vip,
    Employee,
    Wholesale,
}

impl ClientCategory {
    pub const ALL: [ClientCategory; 4] = [
        ClientCategory::Regular,
        ClientCategory::Vip,
        ClientCategory::Employee,
        ClientCategory::Wholesale,
    ];

    /// Case-insensitive, lossy parse: anything unrecognized is `Regular`.
    pub fn parse_lossy(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "vip" => ClientCategory::Vip,
            "employee" => ClientCategory::Employee,
            "wholesale" => ClientCategory::Wholesale,
            _ => ClientCategory::Regular,
        }
    }

    /// Fixed discount lookup. Total: every category maps to a percentage.
    pub fn discount_pct(self) -> u8 {
        match self {
            ClientCategory::Regular => 0,
            ClientCategory::Vip => 10,
            ClientCategory::Employee => 30,
            ClientCategory::Wholesale => 15,
        }
    }
}

impl core::fmt::Display for ClientCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ClientCategory::Regular => "regular",
            ClientCategory::Vip => "vip",
            ClientCategory::Employee => "employee",
            ClientCategory::Wholesale => "wholesale",
        };
        f.write_str(s)
    }
}
