// ============================================================================
// LOGIN/LOGOUT CONTAINER
// ============================================================================
// mapStateToProps: RootState -> LoginLogoutProps (función pura)
// mapDispatchToProps: callbacks que la vista invoca; cada uno despacha una
// acción o lanza la operación asíncrona del SessionViewModel.
// ============================================================================

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::services::{AuthApi, TokenStorage};
use crate::state::{Action, RootState, Store};
use crate::viewmodels::SessionViewModel;

/// Lo que la vista LoginLogout necesita leer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginLogoutProps {
    pub username: Option<String>,
    pub is_logged_in: bool,
    pub show_create_user_modal: bool,
    pub has_login_failed: bool,
}

pub fn map_state_to_props(state: &RootState) -> LoginLogoutProps {
    LoginLogoutProps {
        username: state.login.username.clone(),
        is_logged_in: state.login.is_logged_in(),
        show_create_user_modal: state.create_user_flow.show_create_user_modal,
        has_login_failed: state.login.has_login_failed,
    }
}

type Callback = Rc<dyn Fn()>;
type CredentialsCallback = Rc<dyn Fn(String, String)>;

/// Lanza un future en el event loop (spawn_local en el navegador)
pub type Spawner = Rc<dyn Fn(Pin<Box<dyn Future<Output = ()>>>)>;

pub fn browser_spawner() -> Spawner {
    Rc::new(|future: Pin<Box<dyn Future<Output = ()>>>| {
        wasm_bindgen_futures::spawn_local(future)
    })
}

/// Callbacks que emite la vista LoginLogout
#[derive(Clone)]
pub struct LoginLogoutEvents {
    pub on_login: CredentialsCallback,
    pub on_logout: Callback,
    pub on_login_failed: Rc<dyn Fn(String)>,
    /// Una sola vez por carga de página
    pub setup: Callback,
    pub on_start_create_user_flow: Callback,
    pub on_end_create_user_flow: Callback,
    pub on_create_user: CredentialsCallback,
}

pub fn map_dispatch_to_props<A, T>(
    store: &Store,
    session: &SessionViewModel<A, T>,
    spawner: &Spawner,
    setup_done: &Rc<Cell<bool>>,
) -> LoginLogoutEvents
where
    A: AuthApi + 'static,
    T: TokenStorage + 'static,
{
    let on_login: CredentialsCallback = {
        let session = session.clone();
        let spawner = Rc::clone(spawner);
        Rc::new(move |username: String, password: String| {
            let session = session.clone();
            spawner(Box::pin(async move { session.login(username, password).await }));
        })
    };

    let on_logout: Callback = {
        let session = session.clone();
        Rc::new(move || session.logout())
    };

    let on_login_failed: Rc<dyn Fn(String)> = {
        let store = store.clone();
        Rc::new(move |error: String| store.dispatch(Action::LoginFailed { error }))
    };

    let setup: Callback = {
        let session = session.clone();
        let spawner = Rc::clone(spawner);
        let setup_done = Rc::clone(setup_done);
        Rc::new(move || {
            if setup_done.replace(true) {
                return;
            }
            log::info!("🔧 [LOGIN] Setup: comprobando token guardado");
            let session = session.clone();
            spawner(Box::pin(async move { session.fetch_username_if_token_present().await }));
        })
    };

    let on_start_create_user_flow: Callback = {
        let store = store.clone();
        Rc::new(move || store.dispatch(Action::StartCreateUserFlow))
    };

    let on_end_create_user_flow: Callback = {
        let store = store.clone();
        Rc::new(move || store.dispatch(Action::EndCreateUserFlow))
    };

    let on_create_user: CredentialsCallback = {
        let session = session.clone();
        let spawner = Rc::clone(spawner);
        Rc::new(move |username: String, password: String| {
            spawner(Box::pin(session.create_user(username, password)));
        })
    };

    LoginLogoutEvents {
        on_login,
        on_logout,
        on_login_failed,
        setup,
        on_start_create_user_flow,
        on_end_create_user_flow,
        on_create_user,
    }
}
