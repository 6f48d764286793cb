use std::fmt::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum Platform {
    Windows32,
    Windows64,
    Linux,
    Apple,
    Unknown,
}

impl Platform {
    pub const fn current() -> Self {
        if cfg!(all(windows, target_pointer_width = "32")) {
            Self::Windows32
        } else if cfg!(windows) {
            Self::Windows64
        } else if cfg!(any(target_os = "linux", target_os = "android")) {
            Self::Linux
        } else if cfg!(target_vendor = "apple") {
            Self::Apple
        } else {
            Self::Unknown
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Windows32 => "Windows 32-bits",
            Self::Windows64 => "Windows 64-bits",
            Self::Linux => "Linux",
            Self::Apple => "Apple",
            Self::Unknown => "OS_unknown",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
