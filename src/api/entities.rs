// SPDX-License-Identifier: MPL-2.0
//! Typed shapes for the backend's JSON entities.
//!
//! Field names follow the backend's camelCase wire format; each entity has
//! a companion `*Data` struct used as the body of create and update
//! requests (the backend assigns ids).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered person (student or contact).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pessoa {
    pub id: i64,
    pub nome: String,
    pub cpf: String,
    pub data_nascimento: NaiveDate,
    pub email: String,
    pub telefone: String,
}

/// Request body for creating or updating a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PessoaData {
    pub nome: String,
    pub cpf: String,
    pub data_nascimento: NaiveDate,
    pub email: String,
    pub telefone: String,
}

/// A course offered by the school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curso {
    pub id: i64,
    pub nome: String,
    pub descricao: String,
    pub duracao_horas: u32,
    pub ativo: bool,
}

/// Request body for creating or updating a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursoData {
    pub nome: String,
    pub descricao: String,
    pub duracao_horas: u32,
    pub ativo: bool,
}

/// Enrollment status, spelled in uppercase Portuguese on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusMatricula {
    Ativa,
    Concluida,
    Cancelada,
}

/// An enrollment linking a person to a course.
///
/// The backend embeds the full person and course records rather than ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matricula {
    pub id: i64,
    pub pessoa: Pessoa,
    pub curso: Curso,
    pub data_matricula: NaiveDate,
    pub status: StatusMatricula,
    pub valor_pago: f64,
}

/// Request body for creating or updating an enrollment; references the
/// person and course by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatriculaData {
    pub pessoa_id: i64,
    pub curso_id: i64,
    pub data_matricula: NaiveDate,
    pub status: StatusMatricula,
    pub valor_pago: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pessoa_deserializes_from_backend_json() {
        let json = r#"{
            "id": 7,
            "nome": "Ana Souza",
            "cpf": "123.456.789-00",
            "dataNascimento": "1998-04-12",
            "email": "ana@example.com",
            "telefone": "(11) 91234-5678"
        }"#;
        let pessoa: Pessoa = serde_json::from_str(json).expect("valid pessoa");
        assert_eq!(pessoa.nome, "Ana Souza");
        assert_eq!(
            pessoa.data_nascimento,
            NaiveDate::from_ymd_opt(1998, 4, 12).unwrap()
        );
    }

    #[test]
    fn pessoa_data_serializes_camel_case() {
        let data = PessoaData {
            nome: "Ana".to_string(),
            cpf: "123".to_string(),
            data_nascimento: NaiveDate::from_ymd_opt(2000, 1, 2).unwrap(),
            email: "a@b.c".to_string(),
            telefone: "1".to_string(),
        };
        let value = serde_json::to_value(&data).expect("serializable");
        assert_eq!(value["dataNascimento"], "2000-01-02");
        assert!(value.get("data_nascimento").is_none());
    }

    #[test]
    fn curso_round_trips_duration_and_flag() {
        let json = r#"{
            "id": 3,
            "nome": "Violão",
            "descricao": "Turma iniciante",
            "duracaoHoras": 40,
            "ativo": true
        }"#;
        let curso: Curso = serde_json::from_str(json).expect("valid curso");
        assert_eq!(curso.duracao_horas, 40);
        assert!(curso.ativo);
    }

    #[test]
    fn status_uses_uppercase_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&StatusMatricula::Concluida).unwrap(),
            "\"CONCLUIDA\""
        );
        let status: StatusMatricula = serde_json::from_str("\"CANCELADA\"").unwrap();
        assert_eq!(status, StatusMatricula::Cancelada);
    }

    #[test]
    fn matricula_embeds_full_records() {
        let json = r#"{
            "id": 1,
            "pessoa": {
                "id": 7,
                "nome": "Ana Souza",
                "cpf": "123.456.789-00",
                "dataNascimento": "1998-04-12",
                "email": "ana@example.com",
                "telefone": "(11) 91234-5678"
            },
            "curso": {
                "id": 3,
                "nome": "Violão",
                "descricao": "Turma iniciante",
                "duracaoHoras": 40,
                "ativo": true
            },
            "dataMatricula": "2024-02-01",
            "status": "ATIVA",
            "valorPago": 350.0
        }"#;
        let matricula: Matricula = serde_json::from_str(json).expect("valid matricula");
        assert_eq!(matricula.pessoa.id, 7);
        assert_eq!(matricula.curso.nome, "Violão");
        assert_eq!(matricula.status, StatusMatricula::Ativa);
    }

    #[test]
    fn matricula_data_references_by_id() {
        let data = MatriculaData {
            pessoa_id: 7,
            curso_id: 3,
            data_matricula: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            status: StatusMatricula::Ativa,
            valor_pago: 350.0,
        };
        let value = serde_json::to_value(&data).expect("serializable");
        assert_eq!(value["pessoaId"], 7);
        assert_eq!(value["cursoId"], 3);
        assert_eq!(value["status"], "ATIVA");
    }
}
