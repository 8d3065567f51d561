//! Current scheme selection plus a short, session-persisted history.

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::ColorError;
use crate::naming::Lang;
use crate::scheme::{get_color_scheme, ColorInfo, SchemeKind};
use crate::storage::SessionStorage;

/// Storage key of the persisted history.
pub const HISTORY_KEY: &str = "colorSchemeHistory";

/// Maximum number of history entries kept, newest first.
pub const HISTORY_LIMIT: usize = 5;

/// One recorded selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub base_color: HexColor,
    pub scheme: SchemeKind,
    pub colors: Vec<ColorInfo>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Derived colors cached against the inputs that produced them.
#[derive(Debug, Clone)]
struct Memo {
    base: HexColor,
    kind: SchemeKind,
    lang: Lang,
    colors: Vec<ColorInfo>,
}

impl Memo {
    fn compute(base: &HexColor, kind: SchemeKind, lang: Lang) -> Self {
        Self {
            base: base.clone(),
            kind,
            lang,
            colors: get_color_scheme(base, kind, lang),
        }
    }

    fn matches(&self, base: &HexColor, kind: SchemeKind, lang: Lang) -> bool {
        self.kind == kind && self.lang == lang && &self.base == base
    }
}

/// Owns the current base color, scheme kind and history for one session.
///
/// Every base-color or scheme-kind change records a [`HistoryEntry`] holding
/// the colors of the *new* selection and persists the capped list to the
/// injected storage. Storage problems are logged and otherwise ignored.
pub struct SchemeState<S: SessionStorage> {
    base_color: HexColor,
    scheme: SchemeKind,
    lang: Lang,
    memo: Memo,
    history: Vec<HistoryEntry>,
    storage: S,
}

impl<S: SessionStorage> SchemeState<S> {
    /// Start at red/complementary and hydrate history from `storage`.
    pub fn new(storage: S) -> Self {
        Self::with_lang(storage, Lang::default())
    }

    pub fn with_lang(storage: S, lang: Lang) -> Self {
        let base_color = HexColor::default();
        let scheme = SchemeKind::default();
        let history = load_history(&storage);
        Self {
            memo: Memo::compute(&base_color, scheme, lang),
            base_color,
            scheme,
            lang,
            history,
            storage,
        }
    }

    pub fn base_color(&self) -> &HexColor {
        &self.base_color
    }

    pub fn scheme(&self) -> SchemeKind {
        self.scheme
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Colors of the current selection, base first.
    pub fn colors(&self) -> &[ColorInfo] {
        &self.memo.colors
    }

    /// Recorded selections, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Select a new base color.
    ///
    /// Malformed input returns [`ColorError::InvalidHex`] and leaves the
    /// state untouched.
    pub fn set_base_color(&mut self, color: &str) -> Result<(), ColorError> {
        let base = HexColor::parse(color)?;
        self.base_color = base;
        self.refresh();
        self.record();
        Ok(())
    }

    pub fn set_scheme_kind(&mut self, kind: SchemeKind) {
        self.scheme = kind;
        self.refresh();
        self.record();
    }

    /// Switch the naming language. Not a selection change, so no history.
    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
        self.refresh();
    }

    /// Empty the history and drop the persisted record.
    pub fn clear_history(&mut self) {
        self.history = Vec::new();
        if let Err(e) = self.storage.remove(HISTORY_KEY) {
            warn!("failed to remove persisted history: {e:#}");
        }
        info!("history cleared");
    }

    fn refresh(&mut self) {
        if self.memo.matches(&self.base_color, self.scheme, self.lang) {
            return;
        }
        debug!(
            "recomputing {} scheme for {} ({})",
            self.scheme, self.base_color, self.lang
        );
        self.memo = Memo::compute(&self.base_color, self.scheme, self.lang);
    }

    fn record(&mut self) {
        let entry = HistoryEntry {
            base_color: self.base_color.clone(),
            scheme: self.scheme,
            colors: self.memo.colors.clone(),
            timestamp: now_millis(),
        };

        // The list is replaced wholesale, never edited in place.
        let updated: Vec<HistoryEntry> = std::iter::once(entry)
            .chain(self.history.iter().take(HISTORY_LIMIT - 1).cloned())
            .collect();
        self.history = updated;
        self.persist();
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.history) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize history: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(HISTORY_KEY, &json) {
            warn!("failed to persist history: {e:#}");
        }
    }
}

/// Read the persisted history. Absent, unparsable or incompatible records
/// all come back as an empty list.
pub fn load_history<S: SessionStorage>(storage: &S) -> Vec<HistoryEntry> {
    let Some(raw) = storage.get(HISTORY_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
        Ok(mut history) => {
            history.truncate(HISTORY_LIMIT);
            debug!("hydrated {} history entries", history.len());
            history
        }
        Err(e) => {
            warn!("discarding unreadable history record: {e}");
            Vec::new()
        }
    }
}

pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
