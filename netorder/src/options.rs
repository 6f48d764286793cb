use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// `HOST word ->  bytes: 4  -> dec: ...  -> hex: ...`
    #[default]
    Word,
    /// `u32_h: ...\tin hexa: ...`
    ///
    /// Leaves out the byte width and pads the decimal field to 12.
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct ReportOptions {
    word: u32,
    style: ReportStyle,
    echo_args: bool,
    platform: bool,
    banner: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            word: 64,
            style: ReportStyle::default(),
            echo_args: true,
            platform: true,
            banner: false,
        }
    }
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word(mut self, word: u32) -> Self {
        self.word = word;
        self
    }

    pub fn style(mut self, style: ReportStyle) -> Self {
        self.style = style;
        self
    }

    pub fn echo_args(mut self, enabled: bool) -> Self {
        self.echo_args = enabled;
        self
    }

    pub fn platform(mut self, enabled: bool) -> Self {
        self.platform = enabled;
        self
    }

    /// Opens the output with a greeting and closes it with a line naming the
    /// swap that was shown.
    pub fn banner(mut self, enabled: bool) -> Self {
        self.banner = enabled;
        self
    }

    pub fn demo_word(&self) -> u32 {
        self.word
    }

    pub fn report_style(&self) -> ReportStyle {
        self.style
    }

    pub fn echoes_args(&self) -> bool {
        self.echo_args
    }

    pub fn shows_platform(&self) -> bool {
        self.platform
    }

    pub fn shows_banner(&self) -> bool {
        self.banner
    }
}
