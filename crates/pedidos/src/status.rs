//! Order lifecycle status and payment method enums.
//!
//! Plain data: the order aggregate that drives these transitions lives outside
//! this crate.

use serde::{Deserialize, Serialize};

/// Sales order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPedido {
    Pendente,
    PagamentoAprovado,
    EmSeparacao,
    Enviado,
    Entregue,
    Cancelado,
}

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetodoPagamento {
    CartaoCredito,
    CartaoDebito,
    Pix,
    BoletoBancario,
    TransferenciaBancaria,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializa_em_snake_case() {
        let json = serde_json::to_string(&StatusPedido::PagamentoAprovado).unwrap();
        assert_eq!(json, "\"pagamento_aprovado\"");

        let de: StatusPedido = serde_json::from_str("\"em_separacao\"").unwrap();
        assert_eq!(de, StatusPedido::EmSeparacao);
    }

    #[test]
    fn metodo_de_pagamento_serializa_em_snake_case() {
        let json = serde_json::to_string(&MetodoPagamento::BoletoBancario).unwrap();
        assert_eq!(json, "\"boleto_bancario\"");

        let de: MetodoPagamento = serde_json::from_str("\"pix\"").unwrap();
        assert_eq!(de, MetodoPagamento::Pix);
    }
}
