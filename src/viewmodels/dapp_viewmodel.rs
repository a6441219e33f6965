// ============================================================================
// DAPP VIEWMODEL - Cola de mensajes + ejecución de efectos
// ============================================================================
// `dispatch` encola y drena: aplica `update` y ejecuta los `Command`.
// Los efectos síncronos (alertas, recarga, listeners) se ejecutan al momento;
// los asíncronos se lanzan y su resultado vuelve como otro `Msg`.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::DappSettings;
use crate::error::DappError;
use crate::models::TxAction;
use crate::services::{
    BookingService, Environment, RpcClient, Spawner, TokenService, WalletProvider,
};
use crate::state::{update, AppState, Command, Msg, UpdateDeps};
use crate::utils::{Clock, MathRandom, RandomSource, SystemClock};

pub struct DappViewModel<P, E> {
    state: AppState,
    queue: Rc<RefCell<VecDeque<Msg>>>,
    draining: Rc<Cell<bool>>,
    // Flag para registrar los listeners de la wallet una sola vez
    watching: Rc<Cell<bool>>,
    provider: Option<Rc<P>>,
    env: Rc<E>,
    spawner: Rc<dyn Spawner>,
    random: Rc<RefCell<Box<dyn RandomSource>>>,
    clock: Rc<dyn Clock>,
    settings: Rc<DappSettings>,
}

impl<P, E> Clone for DappViewModel<P, E> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            queue: self.queue.clone(),
            draining: self.draining.clone(),
            watching: self.watching.clone(),
            provider: self.provider.clone(),
            env: self.env.clone(),
            spawner: self.spawner.clone(),
            random: self.random.clone(),
            clock: self.clock.clone(),
            settings: self.settings.clone(),
        }
    }
}

impl<P, E> DappViewModel<P, E>
where
    P: WalletProvider + 'static,
    E: Environment + 'static,
{
    /// `provider` es `None` cuando el navegador no tiene wallet
    pub fn new(
        state: AppState,
        provider: Option<Rc<P>>,
        env: Rc<E>,
        settings: DappSettings,
        spawner: Rc<dyn Spawner>,
    ) -> Self {
        Self {
            state,
            queue: Rc::new(RefCell::new(VecDeque::new())),
            draining: Rc::new(Cell::new(false)),
            watching: Rc::new(Cell::new(false)),
            provider,
            env,
            spawner,
            random: Rc::new(RefCell::new(Box::new(MathRandom))),
            clock: Rc::new(SystemClock),
            settings: Rc::new(settings),
        }
    }

    #[cfg(test)]
    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = Rc::new(RefCell::new(random));
        self
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &DappSettings {
        &self.settings
    }

    /// Arranque de la página
    pub fn mount(&self) {
        self.dispatch(Msg::Mounted {
            provider_detected: self.provider.is_some(),
        });
    }

    /// Encolar un mensaje. Si ya se está drenando la cola, el mensaje se
    /// procesa en el mismo bucle (nunca hay `update` anidados).
    pub fn dispatch(&self, msg: Msg) {
        self.queue.borrow_mut().push_back(msg);
        if self.draining.replace(true) {
            return;
        }

        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(msg) = next else {
                break;
            };
            for command in self.apply(msg) {
                self.run(command);
            }
        }

        self.draining.set(false);
    }

    fn apply(&self, msg: Msg) -> Vec<Command> {
        let mut random = self.random.borrow_mut();
        let mut deps = UpdateDeps {
            random: &mut **random,
            clock: self.clock.as_ref(),
            settings: &self.settings,
        };
        self.state.update(|state| update(state, msg, &mut deps))
    }

    fn run(&self, command: Command) {
        match command {
            Command::Notify(notice) => {
                let lang = self.state.borrow().language.clone();
                self.env.alert(&notice.message(&lang));
            }
            Command::ReloadPage => self.env.reload(),
            Command::WatchProvider => self.watch_provider(),
            command => {
                let vm = self.clone();
                self.spawner.spawn(Box::pin(async move {
                    if let Some(msg) = vm.execute(command).await {
                        vm.dispatch(msg);
                    }
                }));
            }
        }
    }

    fn watch_provider(&self) {
        let Some(provider) = &self.provider else {
            return;
        };
        if self.watching.replace(true) {
            log::warn!("⚠️ [VM] Listeners de la wallet ya registrados, ignorando");
            return;
        }

        let vm = self.clone();
        if let Err(e) = provider.subscribe(Rc::new(move |event| vm.dispatch(Msg::from(event)))) {
            log::error!("❌ [VM] No se pudieron registrar los listeners: {}", e);
            self.watching.set(false);
        }
    }

    /// Efectos asíncronos; devuelven el mensaje con el resultado
    async fn execute(&self, command: Command) -> Option<Msg> {
        let Some(provider) = self.provider.clone() else {
            return Self::without_provider(command);
        };
        let rpc = RpcClient::new(provider);
        let contracts = self.settings.contracts;

        match command {
            Command::RequestAccounts => Some(match rpc.request_accounts().await {
                Ok(accounts) => Msg::AccountsAuthorized(accounts),
                Err(e) => Msg::AuthorizationFailed(e),
            }),

            Command::LoadState { account } => {
                log::info!("🔄 [VM] Cargando saldo y habitaciones para {}", account);
                let token = TokenService::new(rpc.clone(), contracts.token);
                let booking = BookingService::new(rpc, contracts.booking);
                let (balance, rooms) =
                    futures::join!(token.balance_of(&account), booking.get_all_rooms());
                Some(Msg::StateLoaded {
                    account,
                    balance,
                    rooms,
                })
            }

            Command::SendTransfer(request) => {
                let token = TokenService::new(rpc.clone(), contracts.token);
                let result = async {
                    let tx_hash = token.purchase(&request).await?;
                    log::info!("📤 [VM] Compra enviada: {}", tx_hash);
                    rpc.wait_for_receipt(&tx_hash, &*self.env, self.settings.receipt_poll_interval_ms)
                        .await?;
                    Ok::<_, DappError>(tx_hash)
                }
                .await;
                Some(match result {
                    Ok(tx_hash) => Msg::TokensPurchased { tx_hash },
                    Err(error) => Msg::TransactionFailed {
                        action: TxAction::BuyTokens,
                        error,
                    },
                })
            }

            Command::SendBooking(request) => {
                let booking = BookingService::new(rpc.clone(), contracts.booking);
                let result = async {
                    let tx_hash = booking.book_room_by_category(&request).await?;
                    log::info!("📤 [VM] Reserva enviada: {}", tx_hash);
                    rpc.wait_for_receipt(&tx_hash, &*self.env, self.settings.receipt_poll_interval_ms)
                        .await?;
                    Ok::<_, DappError>(tx_hash)
                }
                .await;
                Some(match result {
                    Ok(tx_hash) => Msg::RoomBooked {
                        room_id: request.room_id,
                        tx_hash,
                    },
                    Err(error) => Msg::TransactionFailed {
                        action: TxAction::BookRoom,
                        error,
                    },
                })
            }

            Command::Notify(_) | Command::ReloadPage | Command::WatchProvider => None,
        }
    }

    fn without_provider(command: Command) -> Option<Msg> {
        let error = DappError::ProviderUnavailable;
        match command {
            Command::RequestAccounts => Some(Msg::AuthorizationFailed(error)),
            Command::LoadState { account } => Some(Msg::StateLoaded {
                account,
                balance: Err(error.clone()),
                rooms: Err(error),
            }),
            Command::SendTransfer(_) => Some(Msg::TransactionFailed {
                action: TxAction::BuyTokens,
                error,
            }),
            Command::SendBooking(_) => Some(Msg::TransactionFailed {
                action: TxAction::BookRoom,
                error,
            }),
            Command::Notify(_) | Command::ReloadPage | Command::WatchProvider => None,
        }
    }
}
