use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector compiled on first use.
///
/// Every selector in this crate is a literal, so a compile failure is a bug and panics.
#[derive(Debug)]
pub struct StaticSelector {
    compiled: OnceLock<Selector>,
    source: &'static str,
}

impl StaticSelector {
    pub const fn new(source: &'static str) -> Self {
        Self {
            compiled: OnceLock::new(),
            source,
        }
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        self.compiled
            .get_or_init(|| match Selector::parse(self.source) {
                Ok(sel) => sel,
                Err(e) => panic!("Error parsing static selector {}: {:?}", self.source, e),
            })
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}
