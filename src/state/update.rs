// ============================================================================
// UPDATE - Única función que modifica el estado
// ============================================================================
// Sin IO: devuelve los efectos como `Command` y el viewmodel los ejecuta.
// ============================================================================

use crate::config::DappSettings;
use crate::error::DappError;
use crate::models::room::available_rooms;
use crate::models::{BookingRequest, TokenBalance, TransferRequest};
use crate::state::app_state::{DappState, Phase};
use crate::state::messages::{Command, Msg, Notice};
use crate::utils::clock::{format_timestamp, Clock};
use crate::utils::constants::TOKEN_DECIMALS;
use crate::utils::random::RandomSource;

/// Dependencias inyectadas en la actualización
pub struct UpdateDeps<'a> {
    pub random: &'a mut dyn RandomSource,
    pub clock: &'a dyn Clock,
    pub settings: &'a DappSettings,
}

pub fn update(state: &mut DappState, msg: Msg, deps: &mut UpdateDeps<'_>) -> Vec<Command> {
    match msg {
        Msg::Mounted { provider_detected } => {
            if !provider_detected {
                state.provider_connected = false;
                state.phase = Phase::ProviderMissing;
                return notify_error("🦊 [CONNECT]", DappError::ProviderMissing);
            }
            log::info!("🦊 [CONNECT] Wallet detectada, solicitando cuentas...");
            state.provider_connected = true;
            state.phase = Phase::Authorizing;
            vec![Command::RequestAccounts, Command::WatchProvider]
        }

        Msg::AccountsAuthorized(accounts) => activate_first_account(state, accounts),

        Msg::AuthorizationFailed(error) => {
            log::error!("❌ [CONNECT] Autorización rechazada: {}", error);
            state.session.clear();
            state.phase = Phase::Disconnected;
            Vec::new()
        }

        Msg::AccountsChanged(accounts) => {
            log::info!("👤 [EVENT] accountsChanged: {:?}", accounts);
            activate_first_account(state, accounts)
        }

        Msg::ChainChanged(chain_id) => {
            log::warn!("⛓️ [EVENT] chainChanged -> {}, recargando página", chain_id);
            vec![Command::ReloadPage]
        }

        Msg::StateLoaded {
            account,
            balance,
            rooms,
        } => {
            if account != state.session.account {
                log::warn!(
                    "⏭️ [LOAD] Resultado descartado: cargado para {} pero la cuenta activa es {:?}",
                    account,
                    state.session.account
                );
                return Vec::new();
            }

            let mut complete = true;
            match balance {
                Ok(raw) => {
                    state.balance = TokenBalance::from_raw(raw, TOKEN_DECIMALS);
                    log::info!("💰 [LOAD] Saldo de {}: {} (raw {})", account, state.balance.display, raw);
                }
                Err(e) => {
                    complete = false;
                    log::error!("❌ [LOAD] Error consultando balanceOf: {}", e);
                }
            }
            match rooms {
                Ok(rooms) => {
                    log::info!("🏨 [LOAD] {} habitaciones recibidas", rooms.len());
                    state.rooms = rooms;
                }
                Err(e) => {
                    complete = false;
                    log::error!("❌ [LOAD] Error consultando getAllRooms: {}", e);
                }
            }
            state.session.loaded = complete;
            state.phase = Phase::Ready;
            Vec::new()
        }

        Msg::BuyTokens => {
            if !state.provider_connected {
                return notify_error("🚫 [TX]", DappError::ProviderUnavailable);
            }
            let request = TransferRequest {
                from: state.session.account.clone(),
                to: deps.settings.contracts.token,
                value: deps.settings.purchase_amount,
            };
            log::info!("🪙 [BUY] Enviando {} wei a {}", request.value, request.to);
            vec![Command::SendTransfer(request)]
        }

        Msg::BookRandomRoom => {
            if !state.provider_connected {
                return notify_error("🚫 [TX]", DappError::ProviderUnavailable);
            }
            let available = available_rooms(&state.rooms);
            if available.is_empty() {
                log::info!("🏨 [BOOK] Ninguna habitación libre en el snapshot");
                return vec![Command::Notify(Notice::NoRoomsAvailable)];
            }

            let index = deps.random.next_index(available.len()).min(available.len() - 1);
            let room = available[index];
            let check_in = deps.clock.now_secs();
            let check_out = check_in + deps.settings.stay_seconds;

            log::info!(
                "🛏️ [BOOK] Habitación {} ({}) de {} libres, {} -> {}",
                room.id,
                room.category,
                available.len(),
                format_timestamp(check_in),
                format_timestamp(check_out)
            );

            vec![Command::SendBooking(BookingRequest {
                from: state.session.account.clone(),
                room_id: room.id,
                category: room.category.clone(),
                check_in,
                check_out,
            })]
        }

        Msg::TokensPurchased { tx_hash } => {
            // Sin recarga del saldo: queda viejo hasta la próxima carga
            log::info!("✅ [BUY] Compra confirmada: {}", tx_hash);
            vec![Command::Notify(Notice::TokensPurchased)]
        }

        Msg::RoomBooked { room_id, tx_hash } => {
            log::info!("✅ [BOOK] Habitación {} reservada: {}", room_id, tx_hash);
            vec![Command::Notify(Notice::RoomBooked { room_id })]
        }

        Msg::TransactionFailed { action, error } => {
            if error.is_user_rejection() {
                log::warn!("🚫 [TX] {} rechazada por el usuario", action);
            } else {
                log::error!("❌ [TX] Error en {}: {}", action, error);
            }
            Vec::new()
        }
    }
}

/// Error de entorno: se registra y, si tiene aviso asociado, se muestra
fn notify_error(tag: &str, error: DappError) -> Vec<Command> {
    log::error!("{} {}", tag, error);
    Notice::for_error(&error)
        .map(Command::Notify)
        .into_iter()
        .collect()
}

/// Primera cuenta = sesión activa; lista vacía = sesión limpia sin recarga
fn activate_first_account(state: &mut DappState, accounts: Vec<String>) -> Vec<Command> {
    match accounts.into_iter().next() {
        Some(account) => {
            log::info!("👤 [SESSION] Cuenta activa: {}", account);
            state.session.activate(account.clone());
            state.phase = Phase::Loading;
            vec![Command::LoadState { account }]
        }
        None => {
            log::warn!("👤 [SESSION] Wallet sin cuentas conectadas, sesión limpiada");
            state.session.clear();
            state.phase = Phase::Disconnected;
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::error::DappError;
    use crate::models::{Room, TxAction};
    use crate::test_support::{FixedClock, FixedRandom};
    use alloy_primitives::U256;

    struct Harness {
        state: DappState,
        random: FixedRandom,
        clock: FixedClock,
        settings: DappSettings,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: DappState::new("EN"),
                random: FixedRandom::new(0),
                clock: FixedClock(1_700_000_000),
                settings: DappSettings::from_config(&AppConfig::default()).unwrap(),
            }
        }

        fn connected(account: &str) -> Self {
            let mut h = Self::new();
            h.send(Msg::Mounted {
                provider_detected: true,
            });
            h.send(Msg::AccountsAuthorized(vec![account.to_string()]));
            h
        }

        fn send(&mut self, msg: Msg) -> Vec<Command> {
            let mut deps = UpdateDeps {
                random: &mut self.random,
                clock: &self.clock,
                settings: &self.settings,
            };
            update(&mut self.state, msg, &mut deps)
        }
    }

    fn room(id: u64, category: &str, available: bool) -> Room {
        Room {
            id: U256::from(id),
            category: category.to_string(),
            price_per_night: U256::from(1_000_000_000_000_000_000u128),
            is_available: available,
        }
    }

    #[test]
    fn missing_provider_shows_install_notice_and_nothing_else() {
        let mut h = Harness::new();
        let commands = h.send(Msg::Mounted {
            provider_detected: false,
        });
        assert_eq!(commands, vec![Command::Notify(Notice::InstallWallet)]);
        assert_eq!(h.state.phase, Phase::ProviderMissing);
        assert!(!h.state.provider_connected);
    }

    #[test]
    fn detected_provider_requests_accounts_and_watches_events() {
        let mut h = Harness::new();
        let commands = h.send(Msg::Mounted {
            provider_detected: true,
        });
        assert_eq!(commands, vec![Command::RequestAccounts, Command::WatchProvider]);
        assert_eq!(h.state.phase, Phase::Authorizing);
    }

    #[test]
    fn first_authorized_account_becomes_the_session() {
        let mut h = Harness::new();
        h.send(Msg::Mounted {
            provider_detected: true,
        });
        let commands = h.send(Msg::AccountsAuthorized(vec!["0xA".into(), "0xB".into()]));
        assert_eq!(h.state.session.account, "0xA");
        assert_eq!(h.state.phase, Phase::Loading);
        assert_eq!(
            commands,
            vec![Command::LoadState {
                account: "0xA".to_string()
            }]
        );
    }

    #[test]
    fn rejected_authorization_leaves_session_empty() {
        let mut h = Harness::new();
        h.send(Msg::Mounted {
            provider_detected: true,
        });
        let commands = h.send(Msg::AuthorizationFailed(DappError::Rpc {
            code: Some(4001),
            message: "User rejected the request.".into(),
        }));
        assert!(commands.is_empty());
        assert_eq!(h.state.session.account, "");
        assert_eq!(h.state.phase, Phase::Disconnected);
    }

    #[test]
    fn loaded_balance_is_rendered_with_18_decimals() {
        let mut h = Harness::connected("0xA");
        h.send(Msg::StateLoaded {
            account: "0xA".into(),
            balance: Ok("5000000000000000000".parse().unwrap()),
            rooms: Ok(vec![room(1, "Suite", true)]),
        });
        assert_eq!(h.state.balance.display, "5");
        assert_eq!(h.state.rooms.len(), 1);
        assert!(h.state.session.loaded);
        assert_eq!(h.state.phase, Phase::Ready);
    }

    #[test]
    fn failed_query_keeps_previous_value() {
        let mut h = Harness::connected("0xA");
        h.send(Msg::StateLoaded {
            account: "0xA".into(),
            balance: Ok(U256::from(3_000_000_000_000_000_000u128)),
            rooms: Ok(vec![room(1, "Suite", true)]),
        });
        h.send(Msg::AccountsChanged(vec!["0xA".into()]));
        h.send(Msg::StateLoaded {
            account: "0xA".into(),
            balance: Err(DappError::rpc("network down")),
            rooms: Ok(vec![room(1, "Suite", false), room(2, "Twin", true)]),
        });
        assert_eq!(h.state.balance.display, "3");
        assert_eq!(h.state.rooms.len(), 2);
        assert!(!h.state.session.loaded);
        assert_eq!(h.state.phase, Phase::Ready);
    }

    #[test]
    fn results_for_a_previous_account_are_discarded() {
        let mut h = Harness::connected("0xA");
        h.send(Msg::AccountsChanged(vec!["0xB".into()]));
        h.send(Msg::StateLoaded {
            account: "0xA".into(),
            balance: Ok(U256::from(7u64)),
            rooms: Ok(vec![room(1, "Suite", true)]),
        });
        assert_eq!(h.state.balance.display, "0");
        assert!(h.state.rooms.is_empty());
        assert_eq!(h.state.phase, Phase::Loading);
    }

    #[test]
    fn empty_accounts_changed_clears_session_without_reload() {
        let mut h = Harness::connected("0xA");
        let commands = h.send(Msg::AccountsChanged(vec![]));
        assert!(commands.is_empty());
        assert_eq!(h.state.session.account, "");
        assert_eq!(h.state.phase, Phase::Disconnected);
    }

    #[test]
    fn account_switch_reloads_state_for_new_account() {
        let mut h = Harness::connected("0xA");
        let commands = h.send(Msg::AccountsChanged(vec!["0xC".into()]));
        assert_eq!(h.state.session.account, "0xC");
        assert_eq!(
            commands,
            vec![Command::LoadState {
                account: "0xC".to_string()
            }]
        );
    }

    #[test]
    fn chain_change_always_reloads_the_page() {
        let mut fresh = Harness::new();
        assert_eq!(
            fresh.send(Msg::ChainChanged("0x1".into())),
            vec![Command::ReloadPage]
        );

        let mut connected = Harness::connected("0xA");
        assert_eq!(
            connected.send(Msg::ChainChanged("0xaa36a7".into())),
            vec![Command::ReloadPage]
        );
    }

    #[test]
    fn buy_without_provider_alerts() {
        let mut h = Harness::new();
        h.send(Msg::Mounted {
            provider_detected: false,
        });
        assert_eq!(
            h.send(Msg::BuyTokens),
            vec![Command::Notify(Notice::ProviderNotLoaded)]
        );
    }

    #[test]
    fn buy_is_a_plain_transfer_to_the_token_contract() {
        let mut h = Harness::connected("0xA");
        let commands = h.send(Msg::BuyTokens);
        assert_eq!(
            commands,
            vec![Command::SendTransfer(TransferRequest {
                from: "0xA".into(),
                to: h.settings.contracts.token,
                value: U256::from(100_000_000_000_000_000u64),
            })]
        );
    }

    #[test]
    fn repeated_clicks_each_submit_a_transaction() {
        let mut h = Harness::connected("0xA");
        let first = h.send(Msg::BuyTokens);
        let second = h.send(Msg::BuyTokens);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn booking_with_no_available_rooms_alerts_and_sends_nothing() {
        let mut h = Harness::connected("0xA");
        h.state.rooms = vec![room(1, "Suite", false), room(2, "Twin", false)];
        assert_eq!(
            h.send(Msg::BookRandomRoom),
            vec![Command::Notify(Notice::NoRoomsAvailable)]
        );
        assert_eq!(h.random.draws(), 0);
    }

    #[test]
    fn booking_with_empty_snapshot_alerts() {
        let mut h = Harness::connected("0xA");
        assert_eq!(
            h.send(Msg::BookRandomRoom),
            vec![Command::Notify(Notice::NoRoomsAvailable)]
        );
    }

    #[test]
    fn single_available_room_is_always_chosen_for_one_night() {
        let mut h = Harness::connected("0xA");
        h.state.rooms = vec![
            room(1, "Suite", false),
            room(2, "Twin", true),
            room(3, "Single", false),
        ];
        let commands = h.send(Msg::BookRandomRoom);
        let [Command::SendBooking(booking)] = commands.as_slice() else {
            panic!("expected one booking, got {:?}", commands);
        };
        assert_eq!(booking.room_id, U256::from(2u64));
        assert_eq!(booking.category, "Twin");
        assert_eq!(booking.from, "0xA");
        assert_eq!(booking.check_in, 1_700_000_000);
        assert_eq!(booking.check_out, booking.check_in + 86_400);
    }

    #[test]
    fn random_draw_indexes_the_available_subset() {
        let mut h = Harness::connected("0xA");
        h.random = FixedRandom::new(1);
        h.state.rooms = vec![
            room(10, "Suite", true),
            room(11, "Twin", false),
            room(12, "Single", true),
        ];
        let commands = h.send(Msg::BookRandomRoom);
        let [Command::SendBooking(booking)] = commands.as_slice() else {
            panic!("expected one booking, got {:?}", commands);
        };
        assert_eq!(booking.room_id, U256::from(12u64));
        assert_eq!(booking.category, "Single");
    }

    #[test]
    fn booking_without_provider_alerts() {
        let mut h = Harness::new();
        h.state.rooms = vec![room(1, "Suite", true)];
        assert_eq!(
            h.send(Msg::BookRandomRoom),
            vec![Command::Notify(Notice::ProviderNotLoaded)]
        );
    }

    #[test]
    fn success_messages_become_notices_without_refetch() {
        let mut h = Harness::connected("0xA");
        assert_eq!(
            h.send(Msg::TokensPurchased {
                tx_hash: "0x01".into()
            }),
            vec![Command::Notify(Notice::TokensPurchased)]
        );
        assert_eq!(
            h.send(Msg::RoomBooked {
                room_id: U256::from(4u64),
                tx_hash: "0x02".into()
            }),
            vec![Command::Notify(Notice::RoomBooked {
                room_id: U256::from(4u64)
            })]
        );
    }

    #[test]
    fn failed_transactions_are_only_logged() {
        let mut h = Harness::connected("0xA");
        let before = h.state.clone();
        let commands = h.send(Msg::TransactionFailed {
            action: TxAction::BookRoom,
            error: DappError::Reverted {
                tx_hash: "0x03".into(),
            },
        });
        assert!(commands.is_empty());
        assert_eq!(h.state, before);
    }
}
