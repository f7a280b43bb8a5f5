//! Static class-name tables, one per known page.
//!
//! Each table pairs a legacy class name with its BEM replacement under the
//! page's block (`p-editor`, `p-admin`, `p-queue-status`). Entries are kept
//! in authoring order; [`ClassMap::ordered`](crate::ClassMap::ordered)
//! handles longest-first matching.

/// Class names used by `editor.vue`.
pub const EDITOR: &[(&str, &str)] = &[
    ("editor-page", "p-editor"),
    ("editor-header", "p-editor__header"),
    ("header-btn", "p-editor__header-btn"),
    ("header-title", "p-editor__header-title"),
    ("canvas-section", "p-editor__canvas-section"),
    ("canvas-container", "p-editor__canvas-container"),
    ("canvas", "p-editor__canvas"),
    ("canvas-text", "p-editor__canvas-text"),
    ("character-count", "p-editor__character-count"),
    ("sticker", "p-editor__sticker"),
    ("sticker-delete", "p-editor__sticker-delete"),
    ("control-panel", "p-editor__control-panel"),
    ("control-section", "p-editor__control-section"),
    ("control-title", "p-editor__control-title"),
    ("color-grid", "p-editor__color-grid"),
    ("color-btn", "p-editor__color-btn"),
    ("color-check", "p-editor__color-check"),
    ("slider", "p-editor__slider"),
    ("slider-value", "p-editor__slider-value"),
    ("sticker-categories", "p-editor__sticker-categories"),
    ("category-btn", "p-editor__category-btn"),
    ("sticker-grid", "p-editor__sticker-grid"),
    ("sticker-btn", "p-editor__sticker-btn"),
    ("bottom-actions", "p-editor__bottom-actions"),
    ("action-btn", "p-editor__action-btn"),
    ("modal-overlay", "p-editor__modal-overlay"),
    ("modal-content", "p-editor__modal-content"),
    ("modal-icon", "p-editor__modal-icon"),
    ("modal-title", "p-editor__modal-title"),
    ("modal-message", "p-editor__modal-message"),
    ("modal-actions", "p-editor__modal-actions"),
    ("preview-modal", "p-editor__preview-modal"),
    ("preview-header", "p-editor__preview-header"),
    ("preview-content", "p-editor__preview-content"),
    ("close-btn", "p-editor__close-btn"),
    ("token-section", "p-editor__token-section"),
    ("token-label", "p-editor__token-label"),
    ("token-input-row", "p-editor__token-input-row"),
    ("token-input", "p-editor__token-input"),
    ("token-link", "p-editor__token-link"),
    ("token-hint", "p-editor__token-hint"),
];

/// Class names used by `admin.vue`.
pub const ADMIN: &[(&str, &str)] = &[
    ("admin-page", "p-admin"),
    ("admin-container", "p-admin__container"),
    ("admin-header", "p-admin__header"),
    ("admin-title", "p-admin__title"),
    ("admin-subtitle", "p-admin__subtitle"),
    ("admin-card", "p-admin__card"),
    ("card-title", "p-admin__card-title"),
    ("stats-grid", "p-admin__stats-grid"),
    ("stat-item", "p-admin__stat-item"),
    ("stat-value", "p-admin__stat-value"),
    ("stat-label", "p-admin__stat-label"),
    ("generate-btn", "p-admin__generate-btn"),
    ("token-list", "p-admin__token-list"),
    ("token-item", "p-admin__token-item"),
    ("token-text", "p-admin__token-text"),
    ("token-actions", "p-admin__token-actions"),
    ("btn-copy", "p-admin__btn-copy"),
    ("btn-open-editor", "p-admin__btn-open-editor"),
    ("clear-btn", "p-admin__clear-btn"),
    ("empty-state", "p-admin__empty-state"),
    ("back-btn", "p-admin__back-btn"),
];

/// Class names used by `queue-status.vue`.
pub const QUEUE_STATUS: &[(&str, &str)] = &[
    ("queue-status-page", "p-queue-status"),
    ("queue-status-container", "p-queue-status__container"),
    ("queue-status-header", "p-queue-status__header"),
    ("queue-status-icon", "p-queue-status__icon"),
    ("queue-status-title", "p-queue-status__title"),
    ("queue-status-subtitle", "p-queue-status__subtitle"),
    ("queue-status-card", "p-queue-status__card"),
    ("status-container", "p-queue-status__status-container"),
    ("queue-number", "p-queue-status__queue-number"),
    ("queue-label", "p-queue-status__queue-label"),
    ("estimated-time", "p-queue-status__estimated-time"),
    ("time-value", "p-queue-status__time-value"),
    ("time-note", "p-queue-status__time-note"),
    ("info-box", "p-queue-status__info-box"),
    ("info-title", "p-queue-status__info-title"),
    ("info-list", "p-queue-status__info-list"),
    ("info-item", "p-queue-status__info-item"),
    ("display-link", "p-queue-status__display-link"),
    ("actions", "p-queue-status__actions"),
    ("btn-home", "p-queue-status__btn-home"),
    ("btn-new", "p-queue-status__btn-new"),
    ("message-box", "p-queue-status__message-box"),
    ("message-text", "p-queue-status__message-text"),
    ("loading", "p-queue-status__loading"),
    ("loading-spinner", "p-queue-status__loading-spinner"),
];
