//! Class names shared across pages. The rules live in `assets/main.css`.

// ============================================
// BUTTON STYLES
// ============================================

pub const BTN_PRIMARY: &str = "btn btn-primary";
pub const BTN_SECONDARY: &str = "btn btn-secondary";
pub const BTN_LOOKUP: &str = "btn btn-lookup";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-btn nav-btn-active"
    } else {
        "nav-btn"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub const INPUT: &str = "input";
pub const INPUT_ADDON: &str = "input input-addon";
pub const LABEL: &str = "field-label";
pub const HINT: &str = "field-hint";
pub const REQUIRED: &str = "required-mark";

/// Wrapper for fields that only matter with an existing building.
pub fn dependent_field(enabled: bool) -> &'static str {
    if enabled {
        "field"
    } else {
        "field field-disabled"
    }
}

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub const PANEL: &str = "panel";
pub const PANEL_FORM: &str = "panel panel-form";
pub const PANEL_RESULT: &str = "panel panel-result";
pub const CARD: &str = "card";
pub const GRID_TWO: &str = "grid-two";
pub const GRID_THREE: &str = "grid-three";

// ============================================
// TABLE STYLES
// ============================================

pub const TABLE: &str = "table";
pub const TABLE_HEADER: &str = "table-header";
pub const NUMERIC: &str = "numeric";

// ============================================
// BID TONES
// ============================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BidTone {
    Conservative,
    Standard,
    Aggressive,
}

impl BidTone {
    pub fn label(&self) -> &'static str {
        match self {
            BidTone::Conservative => "控えめ",
            BidTone::Standard => "標準",
            BidTone::Aggressive => "積極的",
        }
    }

    pub fn value_class(&self) -> &'static str {
        match self {
            BidTone::Conservative => "bid-value bid-conservative",
            BidTone::Standard => "bid-value bid-standard",
            BidTone::Aggressive => "bid-value bid-aggressive",
        }
    }
}
