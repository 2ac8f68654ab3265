//! Тесты для модуля parser

pub mod literal_tests;
