// Discord-specific automod settings, read from the environment.

/// Role and channel ids the gateway and commands need.
#[derive(Debug, Clone, Default)]
pub struct AutomodSettings {
    /// Members with this role are never filtered
    pub exempt_role_id: Option<u64>,
    /// Where deletion reports are posted
    pub log_channel_id: Option<u64>,
    /// Roles allowed to run `/automod`
    pub mod_role_ids: Vec<u64>,
}

impl AutomodSettings {
    /// Read `AUTOMOD_EXEMPT_ROLE_ID`, `AUTOMOD_LOG_CHANNEL_ID` and
    /// `AUTOMOD_MOD_ROLE_IDS` (comma separated).
    pub fn from_env() -> Self {
        let settings = Self {
            exempt_role_id: parse_id(std::env::var("AUTOMOD_EXEMPT_ROLE_ID").ok().as_deref()),
            log_channel_id: parse_id(std::env::var("AUTOMOD_LOG_CHANNEL_ID").ok().as_deref()),
            mod_role_ids: parse_id_list(
                std::env::var("AUTOMOD_MOD_ROLE_IDS")
                    .unwrap_or_default()
                    .as_str(),
            ),
        };

        if settings.mod_role_ids.is_empty() {
            tracing::warn!("AUTOMOD_MOD_ROLE_IDS is empty; nobody can manage the automod list");
        }

        settings
    }

    pub fn is_mod_role(&self, role_id: u64) -> bool {
        self.mod_role_ids.contains(&role_id)
    }
}

fn parse_id(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
}

fn parse_id_list(raw: &str) -> Vec<u64> {
    raw.split(',')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() {
                return None;
            }
            match part.parse::<u64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    tracing::warn!("Ignoring invalid role id in AUTOMOD_MOD_ROLE_IDS: {}", part);
                    None
                }
            }
        })
        .collect()
}
