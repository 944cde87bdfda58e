use tracing::info;

macro_rules! env_or {
    ($key:literal, $default:literal) => {
        option_env!($key).unwrap_or($default)
    };
}

pub struct BuildInfo {
    pub version: &'static str,
    pub build_time: &'static str,
    pub branch: &'static str,
    pub commit: &'static str,
    pub profile: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            build_time: env_or!("BUILD_TIME", "unknown"),
            branch: env_or!("GIT_BRANCH", "unknown"),
            commit: env_or!("GIT_COMMIT", "unknown"),
            profile: if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            },
        }
    }
}

/// Logs where this binary came from. Never part of the generated tables.
pub fn log_build_info(info: &BuildInfo) {
    info!(
        "{} v{} ({}@{}, built {}, {})",
        env!("CARGO_PKG_NAME"),
        info.version,
        info.branch,
        info.commit,
        info.build_time,
        info.profile
    );
}
