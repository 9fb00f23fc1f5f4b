//! Shared helpers for command tests.

use crate::model::module::{Code, Credits, Module, ModuleName};
use crate::model::{Application, VersionedModel};

pub fn sample_module(code: &str, name: &str, credits: &str) -> Module {
    Module::new(
        Code::new(code).unwrap(),
        ModuleName::new(name).unwrap(),
        Credits::new(credits).unwrap(),
        Default::default(),
        Default::default(),
    )
}

/// Three distinct modules used across the command tests.
pub fn typical_modules() -> Vec<Module> {
    vec![
        sample_module("CS1010", "Programming Methodology", "4"),
        sample_module("MA1521", "Calculus for Computing", "4"),
        sample_module("GER1000", "Quantitative Reasoning", "2"),
    ]
}

pub fn model_with(modules: Vec<Module>) -> VersionedModel {
    let mut app = Application::default();
    for module in modules {
        app.add_module(module).unwrap();
    }
    VersionedModel::new(app)
}

pub fn code(raw: &str) -> Code {
    Code::new(raw).unwrap()
}
