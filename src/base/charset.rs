#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub cross: char,
    pub chart_axis: char,
    pub chart_bar: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            cross: '+',
            chart_axis: '|',
            chart_bar: '+',
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            cross: '\u{253c}',
            chart_axis: '\u{2502}',
            chart_bar: '\u{2588}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }

    pub fn from_config(config: &crate::base::Config) -> Self {
        let mut charset = Self::default();
        if config.use_unicode_symbols {
            charset = charset.with_unicode()
        }
        if config.use_colored_output {
            charset = charset.with_color()
        }
        charset
    }
}
