// SPDX-License-Identifier: MPL-2.0
//! Async REST client for the course management backend.
//!
//! One method per backend operation, three resources (`pessoas`, `cursos`,
//! `matriculas`), all sharing the same tiny request helpers. Every call is
//! a single attempt: failures come back as [`Error`] and the caller decides
//! how to surface them.

use crate::api::entities::{
    Curso, CursoData, Matricula, MatriculaData, Pessoa, PessoaData,
};
use crate::config::Config;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

const USER_AGENT: &str = concat!("LaMusicaAdmin/", env!("CARGO_PKG_VERSION"));

const PESSOAS: &str = "pessoas";
const CURSOS: &str = "cursos";
const MATRICULAS: &str = "matriculas";

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL (e.g. `http://localhost:8080/api`).
    ///
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base_url())
    }

    /// Returns the base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        if !response.status().is_success() {
            return Err(Error::Api {
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn list<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let response = self.http.get(self.url(resource)).send().await?;
        Self::decode(Self::check_status(response)?).await
    }

    async fn get_one<T: DeserializeOwned>(&self, resource: &str, id: i64) -> Result<T> {
        let url = self.url(&format!("{resource}/{id}"));
        let response = self.http.get(url).send().await?;
        Self::decode(Self::check_status(response)?).await
    }

    async fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        resource: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.http.post(self.url(resource)).json(body).send().await?;
        Self::decode(Self::check_status(response)?).await
    }

    async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        resource: &str,
        id: i64,
        body: &B,
    ) -> Result<T> {
        let url = self.url(&format!("{resource}/{id}"));
        let response = self.http.put(url).json(body).send().await?;
        Self::decode(Self::check_status(response)?).await
    }

    async fn delete(&self, resource: &str, id: i64) -> Result<()> {
        let url = self.url(&format!("{resource}/{id}"));
        let response = self.http.delete(url).send().await?;
        Self::check_status(response)?;
        Ok(())
    }

    // --- pessoas ---

    pub async fn list_pessoas(&self) -> Result<Vec<Pessoa>> {
        self.list(PESSOAS).await
    }

    pub async fn get_pessoa(&self, id: i64) -> Result<Pessoa> {
        self.get_one(PESSOAS, id).await
    }

    pub async fn create_pessoa(&self, data: &PessoaData) -> Result<Pessoa> {
        self.create(PESSOAS, data).await
    }

    pub async fn update_pessoa(&self, id: i64, data: &PessoaData) -> Result<Pessoa> {
        self.update(PESSOAS, id, data).await
    }

    pub async fn delete_pessoa(&self, id: i64) -> Result<()> {
        self.delete(PESSOAS, id).await
    }

    // --- cursos ---

    pub async fn list_cursos(&self) -> Result<Vec<Curso>> {
        self.list(CURSOS).await
    }

    pub async fn get_curso(&self, id: i64) -> Result<Curso> {
        self.get_one(CURSOS, id).await
    }

    pub async fn create_curso(&self, data: &CursoData) -> Result<Curso> {
        self.create(CURSOS, data).await
    }

    pub async fn update_curso(&self, id: i64, data: &CursoData) -> Result<Curso> {
        self.update(CURSOS, id, data).await
    }

    pub async fn delete_curso(&self, id: i64) -> Result<()> {
        self.delete(CURSOS, id).await
    }

    // --- matriculas ---

    pub async fn list_matriculas(&self) -> Result<Vec<Matricula>> {
        self.list(MATRICULAS).await
    }

    pub async fn get_matricula(&self, id: i64) -> Result<Matricula> {
        self.get_one(MATRICULAS, id).await
    }

    pub async fn create_matricula(&self, data: &MatriculaData) -> Result<Matricula> {
        self.create(MATRICULAS, data).await
    }

    pub async fn update_matricula(&self, id: i64, data: &MatriculaData) -> Result<Matricula> {
        self.update(MATRICULAS, id, data).await
    }

    pub async fn delete_matricula(&self, id: i64) -> Result<()> {
        self.delete(MATRICULAS, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slashes() {
        let client = ApiClient::new("http://localhost:8080/api///").expect("client builds");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn url_joins_resource_and_id_paths() {
        let client = ApiClient::new("http://localhost:8080/api").expect("client builds");
        assert_eq!(client.url(PESSOAS), "http://localhost:8080/api/pessoas");
        assert_eq!(
            client.url(&format!("{MATRICULAS}/42")),
            "http://localhost:8080/api/matriculas/42"
        );
    }

    #[test]
    fn from_config_uses_configured_base_url() {
        let config = Config {
            api_base_url: Some("http://backend:9090/api/".to_string()),
            toast_limit: None,
            toast_remove_delay_secs: None,
        };
        let client = ApiClient::from_config(&config).expect("client builds");
        assert_eq!(client.base_url(), "http://backend:9090/api");
    }
}
