//! Self-healing migration of stored widget lists.
//!
//! Widget types removed from the catalog leave stale entries behind in
//! previously saved layouts. Retirements are registered here and applied
//! as one named step on every read, instead of ad hoc filters accumulating
//! at call sites.

use crate::types::{WidgetDescriptor, WidgetKind};

/// Widget ids permanently removed from the catalog.
///
/// Stored entries matching any of these ids are pruned on read. Future
/// retirements append to this list and follow the same path.
pub const RETIRED_WIDGET_IDS: &[&str] = &["water-widget"];

/// Applies the retirement rules to a stored widget list.
///
/// Sorts by `order`, drops retired ids and unrecognized kinds, renumbers
/// `order` to `0..len`, and reports whether anything changed. Running it
/// again on its own output changes nothing.
pub(crate) fn clean_widgets(mut widgets: Vec<WidgetDescriptor>) -> (Vec<WidgetDescriptor>, bool) {
    widgets.sort_by_key(|w| w.order);

    let before = widgets.len();
    widgets.retain(|w| !is_retired(w));
    let mut changed = widgets.len() != before;

    for (index, widget) in widgets.iter_mut().enumerate() {
        let index = index as u32;
        if widget.order != index {
            widget.order = index;
            changed = true;
        }
    }

    (widgets, changed)
}

fn is_retired(widget: &WidgetDescriptor) -> bool {
    widget.kind == WidgetKind::Unknown || RETIRED_WIDGET_IDS.contains(&widget.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(id: &str, kind: WidgetKind, order: u32) -> WidgetDescriptor {
        WidgetDescriptor::new(id, kind, id, order)
    }

    #[test]
    fn test_clean_widgets_prunes_retired_id_and_renumbers() {
        let stored = vec![
            widget("scene-buttons", WidgetKind::Scene, 0),
            widget("water-widget", WidgetKind::Unknown, 1),
            widget("energy-widget", WidgetKind::Energy, 2),
        ];

        let (cleaned, changed) = clean_widgets(stored);

        assert!(changed);
        let ids: Vec<&str> = cleaned.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["scene-buttons", "energy-widget"]);
        let orders: Vec<u32> = cleaned.iter().map(|w| w.order).collect();
        assert_eq!(orders, vec![0, 1]);
    }

    #[test]
    fn test_clean_widgets_prunes_unknown_kinds() {
        let stored = vec![
            widget("energy-widget", WidgetKind::Energy, 0),
            widget("hologram-widget", WidgetKind::Unknown, 1),
        ];

        let (cleaned, changed) = clean_widgets(stored);

        assert!(changed);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].id, "energy-widget");
    }

    #[test]
    fn test_clean_widgets_sorts_by_order_before_renumbering() {
        let stored = vec![
            widget("flo-widget", WidgetKind::Flo, 7),
            widget("energy-widget", WidgetKind::Energy, 3),
        ];

        let (cleaned, changed) = clean_widgets(stored);

        assert!(changed, "Non-contiguous order values get renumbered");
        assert_eq!(cleaned[0].id, "energy-widget");
        assert_eq!(cleaned[0].order, 0);
        assert_eq!(cleaned[1].id, "flo-widget");
        assert_eq!(cleaned[1].order, 1);
    }

    #[test]
    fn test_clean_widgets_is_idempotent() {
        let stored = vec![
            widget("water-widget", WidgetKind::Unknown, 0),
            widget("energy-widget", WidgetKind::Energy, 1),
            widget("scene-buttons", WidgetKind::Scene, 2),
        ];

        let (once, changed) = clean_widgets(stored);
        assert!(changed);

        let (twice, changed_again) = clean_widgets(once.clone());
        assert!(!changed_again, "Second pass must be a no-op");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clean_widgets_leaves_clean_lists_untouched() {
        let stored = vec![
            widget("scene-buttons", WidgetKind::Scene, 0),
            widget("energy-widget", WidgetKind::Energy, 1),
        ];

        let (cleaned, changed) = clean_widgets(stored.clone());
        assert!(!changed);
        assert_eq!(cleaned, stored);
    }
}
