//! The tray surface: an icon plus a hover tooltip.
//!
//! `TraySurface` is what the poll loop draws on. `StatusNotifier` is the
//! real implementation: a freedesktop StatusNotifierItem exported on the
//! session bus, which panels such as KDE Plasma, waybar or the GNOME
//! AppIndicator extension pick up through the StatusNotifierWatcher.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};
use zbus::blocking::{self, connection};
use zbus::interface;

use crate::icons::Pixmap;

mod names {
    pub const WATCHER_BUS: &str = "org.kde.StatusNotifierWatcher";
    pub const WATCHER_OBJECT: &str = "/StatusNotifierWatcher";

    pub const ITEM_INTERFACE: &str = "org.kde.StatusNotifierItem";
    pub const ITEM_OBJECT: &str = "/StatusNotifierItem";
}

/// Something that can show an icon and a tooltip.
pub trait TraySurface {
    fn set_icon_pixmap(&mut self, icon: Pixmap);
    /// Show a named icon from the desktop icon theme.
    fn set_icon_name(&mut self, name: &str);
    fn set_tooltip_markup(&mut self, markup: &str);
    fn clear_tooltip(&mut self);
}

#[derive(Debug, thiserror::Error)]
pub enum TrayError {
    #[error("D-Bus error: {0}")]
    Bus(#[from] zbus::Error),
}

/// What the exported item currently shows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct TrayState {
    icon_name: String,
    icon_pixmap: Option<Pixmap>,
    tooltip: Option<String>,
}

impl TrayState {
    /// Returns true when the icon changed.
    fn show_pixmap(&mut self, icon: Pixmap) -> bool {
        let changed = self.icon_pixmap != Some(icon) || !self.icon_name.is_empty();
        self.icon_pixmap = Some(icon);
        self.icon_name.clear();
        changed
    }

    /// Returns true when the icon changed.
    fn show_icon_name(&mut self, name: &str) -> bool {
        let changed = self.icon_name != name || self.icon_pixmap.is_some();
        self.icon_name = name.to_string();
        self.icon_pixmap = None;
        changed
    }

    /// Returns true when the tooltip changed.
    fn show_tooltip(&mut self, tooltip: Option<&str>) -> bool {
        let changed = self.tooltip.as_deref() != tooltip;
        self.tooltip = tooltip.map(str::to_string);
        changed
    }
}

type IconData = Vec<(i32, i32, Vec<u8>)>;

fn pixmap_data(pixmap: Option<&Pixmap>) -> IconData {
    pixmap
        .map(|p| vec![(p.width, p.height, p.argb.to_vec())])
        .unwrap_or_default()
}

struct ItemIface {
    id: String,
    state: Arc<Mutex<TrayState>>,
}

#[interface(name = "org.kde.StatusNotifierItem")]
impl ItemIface {
    fn activate(&self, _x: i32, _y: i32) {
        // No window to raise.
    }

    fn secondary_activate(&self, _x: i32, _y: i32) {}

    fn context_menu(&self, _x: i32, _y: i32) {}

    fn scroll(&self, _delta: i32, _orientation: String) {}

    #[zbus(property)]
    fn category(&self) -> &str {
        "ApplicationStatus"
    }

    #[zbus(property)]
    fn id(&self) -> String {
        self.id.clone()
    }

    #[zbus(property)]
    fn title(&self) -> String {
        self.id.clone()
    }

    #[zbus(property)]
    fn status(&self) -> &str {
        "Active"
    }

    #[zbus(property)]
    fn item_is_menu(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn icon_name(&self) -> String {
        let Ok(s) = self.state.lock() else {
            return String::new();
        };
        s.icon_name.clone()
    }

    #[zbus(property)]
    fn icon_pixmap(&self) -> IconData {
        let Ok(s) = self.state.lock() else {
            return Vec::new();
        };
        pixmap_data(s.icon_pixmap.as_ref())
    }

    /// `(icon name, icon pixmaps, title, description)`. The title is plain
    /// text, the markup goes in the description. Both empty hides the
    /// tooltip.
    #[zbus(property)]
    fn tool_tip(&self) -> (String, IconData, String, String) {
        let markup = self.state.lock().ok().and_then(|s| s.tooltip.clone());
        match markup {
            Some(markup) => (String::new(), Vec::new(), self.id.clone(), markup),
            None => (String::new(), Vec::new(), String::new(), String::new()),
        }
    }
}

/// A StatusNotifierItem on the session bus.
pub struct StatusNotifier {
    connection: blocking::Connection,
    state: Arc<Mutex<TrayState>>,
}

impl StatusNotifier {
    /// Export the item and announce it to the StatusNotifierWatcher.
    ///
    /// A missing watcher is not fatal: the item stays exported and panels
    /// started later find it by its bus name.
    pub fn new(id: &str) -> Result<Self, TrayError> {
        let state = Arc::new(Mutex::new(TrayState::default()));
        let bus_name = format!("{}-{}-1", names::ITEM_INTERFACE, std::process::id());

        let connection = connection::Builder::session()?
            .name(bus_name.as_str())?
            .serve_at(
                names::ITEM_OBJECT,
                ItemIface {
                    id: id.to_string(),
                    state: state.clone(),
                },
            )?
            .build()?;

        match connection.call_method(
            Some(names::WATCHER_BUS),
            names::WATCHER_OBJECT,
            Some(names::WATCHER_BUS),
            "RegisterStatusNotifierItem",
            &(bus_name.as_str(),),
        ) {
            Ok(_) => info!(%bus_name, "registered tray item"),
            Err(e) => warn!(%bus_name, error = %e, "no StatusNotifierWatcher; tray item exported but not registered"),
        }

        Ok(Self { connection, state })
    }

    fn update(&self, signal: &str, apply: impl FnOnce(&mut TrayState) -> bool) {
        let changed = match self.state.lock() {
            Ok(mut s) => apply(&mut *s),
            Err(_) => return,
        };
        if !changed {
            return;
        }
        if let Err(e) = self.connection.emit_signal(
            None::<&str>,
            names::ITEM_OBJECT,
            names::ITEM_INTERFACE,
            signal,
            &(),
        ) {
            debug!(signal, error = %e, "failed to emit tray signal");
        }
    }
}

impl TraySurface for StatusNotifier {
    fn set_icon_pixmap(&mut self, icon: Pixmap) {
        self.update("NewIcon", |s| s.show_pixmap(icon));
    }

    fn set_icon_name(&mut self, name: &str) {
        self.update("NewIcon", |s| s.show_icon_name(name));
    }

    fn set_tooltip_markup(&mut self, markup: &str) {
        self.update("NewToolTip", |s| s.show_tooltip(Some(markup)));
    }

    fn clear_tooltip(&mut self) {
        self.update("NewToolTip", |s| s.show_tooltip(None));
    }
}

#[cfg(test)]
mod tests;
