// ============================================================================
// TEST SUPPORT - Dobles de prueba (wallet, navegador, azar, reloj)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use alloy_primitives::{hex, Address, U256};
use alloy_sol_types::SolCall;
use futures::executor::LocalSpawner;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use serde_json::Value;

use crate::error::DappError;
use crate::services::contracts::{IHotelBooking, IHotelToken};
use crate::services::{Environment, ProviderEvent, Spawner, WalletProvider};
use crate::utils::{Clock, RandomSource};

/// Cuenta con formato válido para las pruebas que llegan al contrato
pub const ACCOUNT: &str = "0x00000000000000000000000000000000000000aa";

type Scripted = Result<Value, DappError>;

/// Wallet simulada: respuestas por método, registro de llamadas y eventos manuales
#[derive(Default)]
pub struct MockProvider {
    responses: RefCell<HashMap<String, VecDeque<Scripted>>>,
    calls: RefCell<Vec<(String, Value)>>,
    sink: RefCell<Option<Rc<dyn Fn(ProviderEvent)>>>,
    subscriptions: Cell<usize>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respuesta fija para todas las llamadas a `method`
    pub fn respond(&self, method: &str, value: Value) {
        self.script(method, vec![Ok(value)]);
    }

    /// Respuestas en orden; la última se repite
    pub fn respond_sequence(&self, method: &str, values: Vec<Value>) {
        self.script(method, values.into_iter().map(Ok).collect());
    }

    /// Respuesta de `eth_call` para un contrato concreto
    pub fn respond_call(&self, to: Address, value: Value) {
        self.script(&call_key(&to.to_string()), vec![Ok(value)]);
    }

    pub fn fail_call(&self, to: Address, error: DappError) {
        self.script(&call_key(&to.to_string()), vec![Err(error)]);
    }

    pub fn fail(&self, method: &str, error: DappError) {
        self.script(method, vec![Err(error)]);
    }

    fn script(&self, method: &str, results: Vec<Scripted>) {
        self.responses
            .borrow_mut()
            .insert(method.to_string(), results.into());
    }

    pub fn calls_to(&self, method: &str) -> usize {
        self.calls.borrow().iter().filter(|(m, _)| m == method).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_params(&self, method: &str) -> Option<Value> {
        self.calls
            .borrow()
            .iter()
            .rev()
            .find(|(m, _)| m == method)
            .map(|(_, params)| params.clone())
    }

    pub fn subscriptions(&self) -> usize {
        self.subscriptions.get()
    }

    /// Simular un evento de la wallet
    pub fn emit(&self, event: ProviderEvent) {
        let sink = self.sink.borrow().clone();
        if let Some(sink) = sink {
            sink(event);
        }
    }
}

impl WalletProvider for MockProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, DappError> {
        let key = match params[0]["to"].as_str() {
            Some(to) if method == "eth_call" => call_key(to),
            _ => method.to_string(),
        };
        self.calls.borrow_mut().push((method.to_string(), params));
        let mut responses = self.responses.borrow_mut();
        let queue = match responses.contains_key(&key) {
            true => responses.get_mut(&key),
            false => responses.get_mut(method),
        };
        let Some(queue) = queue else {
            return Err(DappError::rpc(format!("unexpected method {}", method)));
        };
        if queue.len() > 1 {
            queue.pop_front().unwrap_or_else(|| Err(DappError::rpc("empty script")))
        } else {
            queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(DappError::rpc("empty script")))
        }
    }

    fn subscribe(&self, sink: Rc<dyn Fn(ProviderEvent)>) -> Result<(), DappError> {
        self.subscriptions.set(self.subscriptions.get() + 1);
        *self.sink.borrow_mut() = Some(sink);
        Ok(())
    }
}

fn call_key(to: &str) -> String {
    format!("eth_call:{}", to.to_lowercase())
}

/// Navegador simulado: registra alertas, recargas y esperas
#[derive(Default)]
pub struct MockEnvironment {
    alerts: RefCell<Vec<String>>,
    reloads: Cell<usize>,
    sleeps: RefCell<Vec<u32>>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }

    pub fn sleeps(&self) -> Vec<u32> {
        self.sleeps.borrow().clone()
    }
}

impl Environment for MockEnvironment {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    async fn sleep(&self, millis: u32) {
        self.sleeps.borrow_mut().push(millis);
    }
}

/// Siempre devuelve el mismo índice y cuenta los sorteos
pub struct FixedRandom {
    index: usize,
    draws: usize,
}

impl FixedRandom {
    pub fn new(index: usize) -> Self {
        Self { index, draws: 0 }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for FixedRandom {
    fn next_index(&mut self, _len: usize) -> usize {
        self.draws += 1;
        self.index
    }
}

pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_secs(&self) -> u64 {
        self.0
    }
}

/// Spawner sobre un `LocalPool` de futures
pub struct PoolSpawner(pub LocalSpawner);

impl Spawner for PoolSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.0.spawn_local(task).expect("local pool is alive");
    }
}

/// Respuesta ABI de `getAllRooms()` con precio de 2 tokens por noche
pub fn encoded_rooms(rooms: &[(u64, &str, bool)]) -> String {
    let rooms: Vec<IHotelBooking::Room> = rooms
        .iter()
        .map(|(id, category, available)| IHotelBooking::Room {
            id: U256::from(*id),
            category: category.to_string(),
            pricePerNight: U256::from(2_000_000_000_000_000_000u128),
            isAvailable: *available,
        })
        .collect();
    hex::encode_prefixed(IHotelBooking::getAllRoomsCall::abi_encode_returns(&(rooms,)))
}

/// Respuesta ABI de `balanceOf()`
pub fn encoded_balance(raw: U256) -> String {
    hex::encode_prefixed(IHotelToken::balanceOfCall::abi_encode_returns(&(raw,)))
}
