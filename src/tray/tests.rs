use super::*;
use crate::icons::{PAUSED_ICON_NAME, progress_icon};

fn iface() -> (ItemIface, Arc<Mutex<TrayState>>) {
    let state = Arc::new(Mutex::new(TrayState::default()));
    let iface = ItemIface {
        id: "mpdtray".to_string(),
        state: state.clone(),
    };
    (iface, state)
}

#[test]
fn pixmap_and_icon_name_replace_each_other() {
    let mut s = TrayState::default();

    assert!(s.show_pixmap(progress_icon(10)));
    assert!(!s.show_pixmap(progress_icon(10)));
    assert!(s.show_pixmap(progress_icon(11)));
    assert!(s.icon_name.is_empty());

    assert!(s.show_icon_name(PAUSED_ICON_NAME));
    assert!(!s.show_icon_name(PAUSED_ICON_NAME));
    assert_eq!(s.icon_pixmap, None);

    assert!(s.show_pixmap(progress_icon(11)));
    assert!(s.icon_name.is_empty());
}

#[test]
fn tooltip_changes_are_detected() {
    let mut s = TrayState::default();
    assert!(!s.show_tooltip(None));
    assert!(s.show_tooltip(Some("<b>a</b>")));
    assert!(!s.show_tooltip(Some("<b>a</b>")));
    assert!(s.show_tooltip(None));
    assert_eq!(s.tooltip, None);
}

#[test]
fn icon_properties_follow_shared_state() {
    let (iface, state) = iface();
    assert_eq!(iface.icon_name(), "");
    assert!(iface.icon_pixmap().is_empty());

    state.lock().unwrap().show_pixmap(progress_icon(25));
    let pixmaps = iface.icon_pixmap();
    assert_eq!(pixmaps.len(), 1);
    let (w, h, data) = &pixmaps[0];
    assert_eq!(*w, crate::icons::ICON_SIZE);
    assert_eq!(*h, crate::icons::ICON_SIZE);
    assert_eq!(data.as_slice(), progress_icon(25).argb);

    state.lock().unwrap().show_icon_name(PAUSED_ICON_NAME);
    assert_eq!(iface.icon_name(), PAUSED_ICON_NAME);
    assert!(iface.icon_pixmap().is_empty());
}

#[test]
fn tool_tip_carries_markup_in_description() {
    let (iface, state) = iface();
    let (_, _, title, description) = iface.tool_tip();
    assert!(title.is_empty());
    assert!(description.is_empty());

    state.lock().unwrap().show_tooltip(Some("<b>Song</b>"));
    let (icon_name, icons, title, description) = iface.tool_tip();
    assert!(icon_name.is_empty());
    assert!(icons.is_empty());
    assert_eq!(title, "mpdtray");
    assert_eq!(description, "<b>Song</b>");

    state.lock().unwrap().show_tooltip(None);
    let (_, _, title, description) = iface.tool_tip();
    assert!(title.is_empty());
    assert!(description.is_empty());
}

#[test]
fn static_item_properties() {
    let (iface, _) = iface();
    assert_eq!(iface.id(), "mpdtray");
    assert_eq!(iface.category(), "ApplicationStatus");
    assert_eq!(iface.status(), "Active");
    assert!(!iface.item_is_menu());
}

#[test]
fn property_types_match_status_notifier_signatures() {
    use zvariant::Type;

    assert_eq!(<IconData as Type>::SIGNATURE.to_string(), "a(iiay)");
    assert_eq!(
        <(String, IconData, String, String) as Type>::SIGNATURE.to_string(),
        "(sa(iiay)ss)"
    );
}
