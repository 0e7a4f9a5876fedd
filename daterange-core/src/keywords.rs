use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Relative day words understood in place of a `YYYYMMDD` bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Keyword {
    Today,
    Yesterday,
    Tomorrow,
}

impl Keyword {
    /// Offset in days from the reference date.
    pub fn offset_days(self) -> i64 {
        match self {
            Keyword::Today => 0,
            Keyword::Yesterday => -1,
            Keyword::Tomorrow => 1,
        }
    }
}

pub struct Keywords;

impl Keywords {
    /// Returns the **global keyword registry** (input → canonical).
    ///
    /// Initialized once on first access and guarded by an [`RwLock`]; many readers
    /// or one writer. All keys are stored lowercased for case-insensitive lookups.
    ///
    /// Seeded with every canonical word mapping to itself. Use [`extend`](Self::extend)
    /// to add synonyms and [`find`](Self::find) / [`matches`](Self::matches) to look words up.
    fn registry() -> &'static RwLock<HashMap<String, Keyword>> {
        static REGISTRY: Lazy<RwLock<HashMap<String, Keyword>>> = Lazy::new(|| {
            let m = Keyword::iter()
                .map(|k| (k.as_ref().to_string(), k))
                .collect::<HashMap<_, _>>();
            RwLock::new(m)
        });
        &REGISTRY
    }

    /// Extends the global registry with user-defined **synonyms**.
    ///
    /// Each pair is `(alias, target)`. The `target` must already be known to the
    /// registry (a canonical word or an earlier synonym), otherwise the pair is
    /// skipped. Keys are lowercased.
    ///
    /// Typical call site is `Config::load()`, after reading `[synonyms]`:
    ///
    /// ```toml
    /// [synonyms]
    /// ytd  = "yesterday"
    /// hoy  = "today"
    /// ```
    pub fn extend(synonyms: &[(String, String)]) {
        let mut reg = match Self::registry().write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (alias, target) in synonyms {
            match reg.get(&target.to_ascii_lowercase()) {
                Some(&canonical) => {
                    reg.insert(alias.to_ascii_lowercase(), canonical);
                }
                None => tracing::warn!(%alias, %target, "ignoring synonym for unknown keyword"),
            }
        }
    }

    /// Returns `true` if `word` is a canonical word (eg "today").
    pub fn is_canonical(word: &str) -> bool {
        let word = word.to_ascii_lowercase();
        Keyword::iter().any(|key| key.as_ref() == word)
    }

    /// Looks `input` up case-insensitively among canonical words and synonyms.
    pub fn find(input: &str) -> Option<Keyword> {
        let reg = match Self::registry().read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        reg.get(&input.to_ascii_lowercase()).copied()
    }

    /// Returns `true` if `input` equals (case-insensitively) the given keyword
    /// or any of its registered synonyms.
    pub fn matches(keyword: Keyword, input: &str) -> bool {
        Self::find(input) == Some(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert!(Keywords::matches(Keyword::Today, "today"));
        assert!(Keywords::matches(Keyword::Yesterday, "YESTERDAY"));
        assert!(Keywords::matches(Keyword::Tomorrow, "Tomorrow"));
    }

    #[test]
    fn synonyms_extend() {
        Keywords::extend(&[
            ("ytd".into(), "yesterday".into()),
            ("AYER".into(), "yesterday".into()),
            ("tmrw".into(), "tomorrow".into()),
        ]);
        assert!(Keywords::matches(Keyword::Yesterday, "ytd"));
        assert!(Keywords::matches(Keyword::Yesterday, "ayer"));
        assert!(Keywords::matches(Keyword::Tomorrow, "tmrw"));
    }

    #[test]
    fn synonym_of_synonym_resolves_to_canonical() {
        Keywords::extend(&[("hoy".into(), "today".into())]);
        Keywords::extend(&[("avui".into(), "hoy".into())]);
        assert_eq!(Keywords::find("avui"), Some(Keyword::Today));
    }

    #[test]
    fn synonym_for_unknown_target_is_skipped() {
        Keywords::extend(&[("fortnight".into(), "next fortnight".into())]);
        assert_eq!(Keywords::find("fortnight"), None);
    }

    #[test]
    fn unknown_word_is_not_a_keyword() {
        assert!(!Keywords::matches(Keyword::Tomorrow, "not in registry"));
        assert_eq!(Keywords::find("20210101"), None);
    }

    #[test]
    fn canonical_words() {
        assert!(Keywords::is_canonical("today"));
        assert!(Keywords::is_canonical("Yesterday"));
        assert!(!Keywords::is_canonical("ytd"));
    }

    #[test]
    fn offsets() {
        assert_eq!(Keyword::Yesterday.offset_days(), -1);
        assert_eq!(Keyword::Today.offset_days(), 0);
        assert_eq!(Keyword::Tomorrow.offset_days(), 1);
    }
}
