use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default)]
    pub is_main_net: bool,
    #[serde(default)]
    pub bech32_hrp: Option<String>,
}

impl ChainConfig {
    /// Explicit override first, then the network default.
    pub fn hrp_prefix(&self) -> String {
        match &self.bech32_hrp {
            Some(hrp) if !hrp.trim().is_empty() => hrp.trim().to_string(),
            _ => HrpPrefix::from_main_net(self.is_main_net).prefix().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chain: ChainConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HrpPrefix {
    MainNet,
    #[default]
    TestNet,
}

impl HrpPrefix {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::MainNet => "link",
            Self::TestNet => "tlink",
        }
    }

    pub fn from_main_net(is_main_net: bool) -> Self {
        if is_main_net {
            Self::MainNet
        } else {
            Self::TestNet
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hrp_prefix_resolution() {
        assert_eq!(ChainConfig::default().hrp_prefix(), "tlink");

        let main_net = ChainConfig {
            is_main_net: true,
            bech32_hrp: None,
        };
        assert_eq!(main_net.hrp_prefix(), "link");

        let custom = ChainConfig {
            is_main_net: true,
            bech32_hrp: Some("cosmos".to_string()),
        };
        assert_eq!(custom.hrp_prefix(), "cosmos");
    }
}
