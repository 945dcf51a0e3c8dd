// SPDX-License-Identifier: MPL-2.0
//! Backend integration: entity shapes and the REST client.
//!
//! The backend exposes three JSON resources under one base URL:
//! `pessoas`, `cursos` and `matriculas`, each with list/get/create/update/
//! delete operations. It is treated as a black box; anything non-2xx is an
//! error for the caller to surface.

pub mod client;
pub mod entities;

pub use client::ApiClient;
pub use entities::{
    Curso, CursoData, Matricula, MatriculaData, Pessoa, PessoaData, StatusMatricula,
};
