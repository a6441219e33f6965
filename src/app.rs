// ============================================================================
// APP - Montaje de la aplicación sobre #app
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::{DappSettings, CONFIG};
use crate::dom::{append_child, clear_children, delegate_clicks, get_element_by_id, ClickListener};
use crate::services::{BrowserEnvironment, BrowserSpawner, InjectedProvider};
use crate::state::{AppState, DappState};
use crate::utils::ROOT_ELEMENT_ID;
use crate::viewmodels::DappViewModel;
use crate::views::{action_message, render_app, ACTION_ATTR};

pub type BrowserViewModel = DappViewModel<InjectedProvider, BrowserEnvironment>;

/// Aplicación principal
pub struct App {
    root: Element,
    viewmodel: BrowserViewModel,
    // Listener delegado de la raíz: debe vivir tanto como la App
    _clicks: ClickListener,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let settings = DappSettings::from_config(&CONFIG)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let provider = InjectedProvider::detect().map(Rc::new);
        if provider.is_none() {
            log::warn!("⚠️ [APP] No se detectó window.ethereum");
        }

        let state = AppState::new(DappState::new(CONFIG.language.clone()));
        let viewmodel = DappViewModel::new(
            state.clone(),
            provider,
            Rc::new(BrowserEnvironment),
            settings,
            Rc::new(BrowserSpawner),
        );

        // Re-render agrupado: varios cambios seguidos -> un solo render.
        // Solo se guarda el último timeout; reemplazarlo libera el ya disparado.
        let scheduled = Rc::new(Cell::new(false));
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        state.subscribe(move || {
            if scheduled.replace(true) {
                return;
            }
            let scheduled = scheduled.clone();
            let timeout = Timeout::new(0, move || {
                scheduled.set(false);
                crate::rerender_app();
            });
            *pending.borrow_mut() = Some(timeout);
        });

        // Un solo listener para toda la vida de la página, no uno por render
        let clicks = {
            let vm = viewmodel.clone();
            delegate_clicks(&root, ACTION_ATTR, move |action| match action_message(action) {
                Some(msg) => vm.dispatch(msg),
                None => log::warn!("⚠️ [APP] Acción desconocida: {}", action),
            })?
        };

        Ok(Self {
            root,
            viewmodel,
            _clicks: clicks,
        })
    }

    pub fn render(&self) -> Result<(), JsValue> {
        clear_children(&self.root);

        let state = self.viewmodel.state().borrow();
        let view = render_app(&state, self.viewmodel.settings())?;
        append_child(&self.root, &view)
    }

    pub fn viewmodel(&self) -> BrowserViewModel {
        self.viewmodel.clone()
    }
}
