// src/models/address.rs

use serde::Serialize;
use utoipa::ToSchema;

// Endereço resolvido a partir de um CEP de 8 dígitos. Usado só para
// pré-preencher o cadastro do lead; falha na consulta não é fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    #[schema(example = "01310100")]
    pub cep: String,
    #[schema(example = "Avenida Paulista")]
    pub street: String,
    #[schema(example = "Bela Vista")]
    pub neighborhood: String,
    #[schema(example = "São Paulo")]
    pub city: String,
    #[schema(example = "SP")]
    pub state: String,
}
