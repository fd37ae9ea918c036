// Stateful managers
// Managers own persisted state and expose the operations that mutate it.

pub mod search_history_manager;
