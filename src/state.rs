//! Session state shared across surfaces
//!
//! Holds the active-template store (Leptos context), the persisted device
//! mode for the config preview, and the config panel enum. Local-storage
//! access is guarded so a non-browser runtime degrades to defaults
//! instead of panicking.

use leptos::prelude::*;

use crate::routing::DEFAULT_TEMPLATE_ID;

/// Local-storage key holding the last chosen device mode.
pub const DEVICE_MODE_STORAGE_KEY: &str = "convite.device-mode";

/// The currently selected template id, provided once at the app root.
///
/// Exactly one writer path per surface: route resolution on navigation,
/// or an explicit pick in a template selector. The preview iframe never
/// reads this — it re-resolves its own URL with a second app instance.
#[derive(Clone, Copy)]
pub struct ActiveTemplate(pub RwSignal<String>);

impl ActiveTemplate {
    pub fn new() -> Self {
        Self(RwSignal::new(DEFAULT_TEMPLATE_ID.to_string()))
    }

    pub fn get(&self) -> String {
        self.0.get()
    }

    pub fn set(&self, id: String) {
        if self.0.with_untracked(|current| current != &id) {
            self.0.set(id);
        }
    }
}

impl Default for ActiveTemplate {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_active_template() {
    provide_context(ActiveTemplate::new());
}

pub fn use_active_template() -> ActiveTemplate {
    expect_context::<ActiveTemplate>()
}

/// Simulated viewport for the device preview frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceMode {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl DeviceMode {
    pub const ALL: [DeviceMode; 3] = [DeviceMode::Mobile, DeviceMode::Tablet, DeviceMode::Desktop];

    pub fn as_str(self) -> &'static str {
        match self {
            DeviceMode::Mobile => "mobile",
            DeviceMode::Tablet => "tablet",
            DeviceMode::Desktop => "desktop",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeviceMode::Mobile => "Celular",
            DeviceMode::Tablet => "Tablet",
            DeviceMode::Desktop => "Desktop",
        }
    }

    /// Parse a stored value; anything unrecognized is `None` so the
    /// caller falls back to the default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mobile" => Some(DeviceMode::Mobile),
            "tablet" => Some(DeviceMode::Tablet),
            "desktop" => Some(DeviceMode::Desktop),
            _ => None,
        }
    }
}

/// Read the persisted device mode, defaulting to desktop when storage is
/// unavailable or holds a corrupt value.
pub fn load_device_mode() -> DeviceMode {
    stored_device_mode().unwrap_or_default()
}

fn stored_device_mode() -> Option<DeviceMode> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(DEVICE_MODE_STORAGE_KEY).ok()??;
        DeviceMode::parse(&raw)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Persist the device mode. Only the config surface's toggle calls this.
pub fn store_device_mode(mode: DeviceMode) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            log::warn!("device mode not persisted: storage unavailable");
            return;
        };
        if storage.set_item(DEVICE_MODE_STORAGE_KEY, mode.as_str()).is_err() {
            log::warn!("device mode not persisted: storage write failed");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mode;
    }
}

/// Mutually exclusive sub-views of the config surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePanel {
    #[default]
    Dashboard,
    Templates,
    TemplatesSelector,
    Analytics,
    Rsvp,
    Presents,
    Content,
    Review,
}

impl ActivePanel {
    pub const ALL: [ActivePanel; 8] = [
        ActivePanel::Dashboard,
        ActivePanel::Templates,
        ActivePanel::TemplatesSelector,
        ActivePanel::Analytics,
        ActivePanel::Rsvp,
        ActivePanel::Presents,
        ActivePanel::Content,
        ActivePanel::Review,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivePanel::Dashboard => "Painel",
            ActivePanel::Templates => "Pré-visualização",
            ActivePanel::TemplatesSelector => "Modelos",
            ActivePanel::Analytics => "Estatísticas",
            ActivePanel::Rsvp => "Confirmações",
            ActivePanel::Presents => "Presentes",
            ActivePanel::Content => "Conteúdo",
            ActivePanel::Review => "Recados",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_mode_round_trips_through_its_stored_form() {
        for mode in DeviceMode::ALL {
            assert_eq!(DeviceMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn corrupt_or_absent_stored_values_fall_back_to_desktop() {
        assert_eq!(DeviceMode::parse("televisao"), None);
        assert_eq!(DeviceMode::parse(""), None);
        assert_eq!(DeviceMode::parse("Mobile"), None);
        // load_device_mode applies the default off-browser too.
        assert_eq!(load_device_mode(), DeviceMode::Desktop);
    }

    #[test]
    fn default_panel_is_the_dashboard() {
        assert_eq!(ActivePanel::default(), ActivePanel::Dashboard);
    }
}
