//! tests/mod.rs
//! Módulo que agrupa os testes unitários e os dublês compartilhados.

pub mod handler_tests;
