//! Shared class strings so the pages stay visually consistent.

pub const PANEL: &str = "panel";

pub const SECTION_TITLE: &str = "text-sm font-semibold uppercase tracking-wide text-slate-500";

pub const FIELD_LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";

pub const INPUT: &str = "input-field mt-1 w-full";

pub const BTN_PRIMARY: &str = "btn-primary";

pub const BTN_GHOST: &str = "btn-ghost";

pub const TEXT_MUTED: &str = "text-sm text-slate-400";
