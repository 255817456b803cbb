// src/services/address_service.rs

// Cliente fino do ViaCEP para pré-preencher o endereço do lead. Consulta
// oportunista: qualquer falha é devolvida como erro recuperável e nada do
// estado do funil é tocado.

use reqwest::Client;
use serde::Deserialize;

use crate::{common::error::AppError, models::address::AddressInfo};

const DEFAULT_BASE_URL: &str = "https://viacep.com.br/ws";
const USER_AGENT: &str = "funil-backend/0.1.0";

// Formato de resposta do ViaCEP. CEP inexistente vem como 200 com
// {"erro": true} no corpo.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    erro: bool,
}

#[derive(Clone)]
pub struct AddressService {
    http: Client,
    base_url: String,
}

impl AddressService {
    pub fn new(base_url: Option<String>) -> Result<Self, AppError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    pub async fn lookup(&self, cep: &str) -> Result<AddressInfo, AppError> {
        validate_cep(cep)?;

        let url = format!("{}/{}/json/", self.base_url.trim_end_matches('/'), cep);
        let response = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<ViaCepResponse>()
            .await?;

        if response.erro {
            return Err(AppError::CepNotFound);
        }

        Ok(AddressInfo {
            cep: response.cep.replace('-', ""),
            street: response.logradouro,
            neighborhood: response.bairro,
            city: response.localidade,
            state: response.uf,
        })
    }
}

// CEP válido: exatamente 8 dígitos numéricos
fn validate_cep(cep: &str) -> Result<(), AppError> {
    if cep.len() == 8 && cep.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AppError::InvalidCep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cep_must_have_exactly_eight_digits() {
        assert!(validate_cep("01310100").is_ok());
        assert!(validate_cep("0131010").is_err());
        assert!(validate_cep("013101000").is_err());
        assert!(validate_cep("01310-10").is_err());
        assert!(validate_cep("abcdefgh").is_err());
        assert!(validate_cep("").is_err());
    }
}
