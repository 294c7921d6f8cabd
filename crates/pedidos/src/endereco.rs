//! Delivery address: an immutable value object with field-presence and
//! postal-code-format invariants.

use std::sync::LazyLock;

use regex::Regex;

use vendas_core::{DomainError, DomainResult, ValueObject, guard};

// Brazilian postal code, digits only: 00000-000.
static CEP_FORMATO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}-\d{3}$").expect("padrão de CEP literal"));

/// Value object: delivery address.
///
/// Created only through [`EnderecoEntrega::criar`], which validates every field
/// atomically. Immutable after construction; equality and hashing are
/// structural over all seven fields, with the optional `complemento`
/// normalized to the empty string.
#[derive(Debug, Clone)]
pub struct EnderecoEntrega {
    cep: String,
    logradouro: String,
    complemento: String,
    bairro: String,
    estado: String,
    cidade: String,
    pais: String,
}

impl EnderecoEntrega {
    /// Validated factory. All required fields must be non-blank and `cep` must
    /// match `00000-000`; on any violation no partial object is produced.
    pub fn criar(
        cep: &str,
        logradouro: &str,
        complemento: Option<&str>,
        bairro: &str,
        estado: &str,
        cidade: &str,
        pais: &str,
    ) -> DomainResult<Self> {
        guard::against_blank(cep, "cep")?;
        guard::against_blank(logradouro, "logradouro")?;
        guard::against_blank(bairro, "bairro")?;
        guard::against_blank(estado, "estado")?;
        guard::against_blank(cidade, "cidade")?;
        guard::against_blank(pais, "pais")?;

        if !CEP_FORMATO.is_match(cep) {
            return Err(DomainError::new(
                "Formato de CEP inválido. O formato correto é 00000-000.",
            ));
        }

        Ok(Self {
            cep: cep.to_owned(),
            logradouro: logradouro.to_owned(),
            complemento: complemento.unwrap_or_default().to_owned(),
            bairro: bairro.to_owned(),
            estado: estado.to_owned(),
            cidade: cidade.to_owned(),
            pais: pais.to_owned(),
        })
    }

    pub fn cep(&self) -> &str {
        &self.cep
    }

    pub fn logradouro(&self) -> &str {
        &self.logradouro
    }

    pub fn complemento(&self) -> &str {
        &self.complemento
    }

    pub fn bairro(&self) -> &str {
        &self.bairro
    }

    pub fn estado(&self) -> &str {
        &self.estado
    }

    pub fn cidade(&self) -> &str {
        &self.cidade
    }

    pub fn pais(&self) -> &str {
        &self.pais
    }

    /// Single human-readable line with every field in a fixed order.
    pub fn formatar_completo(&self) -> String {
        format!(
            "{}, {} - {}, {} - {}, {} - CEP: {}",
            self.logradouro,
            self.complemento,
            self.bairro,
            self.cidade,
            self.estado,
            self.pais,
            self.cep
        )
    }
}

impl ValueObject for EnderecoEntrega {
    type Component<'a>
        = &'a str
    where
        Self: 'a;

    fn equality_components(&self) -> Vec<&str> {
        vec![
            &self.cep,
            &self.logradouro,
            &self.complemento,
            &self.bairro,
            &self.estado,
            &self.cidade,
            &self.pais,
        ]
    }
}

impl PartialEq for EnderecoEntrega {
    fn eq(&self, other: &Self) -> bool {
        self.value_equals(other)
    }
}

impl Eq for EnderecoEntrega {}

impl core::hash::Hash for EnderecoEntrega {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.value_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criar_endereco_valido() -> EnderecoEntrega {
        EnderecoEntrega::criar(
            "12345-678",
            "Rua Exemplo",
            Some("Apto 101"),
            "Bairro Exemplo",
            "Estado Exemplo",
            "Cidade Exemplo",
            "Pais Exemplo",
        )
        .unwrap()
    }

    #[test]
    fn cria_endereco_quando_dados_validos() {
        let endereco = criar_endereco_valido();

        assert_eq!(endereco.cep(), "12345-678");
        assert_eq!(endereco.logradouro(), "Rua Exemplo");
        assert_eq!(endereco.complemento(), "Apto 101");
        assert_eq!(endereco.bairro(), "Bairro Exemplo");
        assert_eq!(endereco.estado(), "Estado Exemplo");
        assert_eq!(endereco.cidade(), "Cidade Exemplo");
        assert_eq!(endereco.pais(), "Pais Exemplo");
    }

    #[test]
    fn complemento_ausente_normaliza_para_vazio() {
        let endereco = EnderecoEntrega::criar(
            "12345-678",
            "Rua A",
            None,
            "Bairro",
            "Estado",
            "Cidade",
            "Pais",
        )
        .unwrap();
        assert_eq!(endereco.complemento(), "");
        assert!(endereco.formatar_completo().contains("Rua A"));
    }

    #[test]
    fn rejeita_cep_com_formato_invalido() {
        // sem hífen, hífen na posição errada, letras
        for cep in ["12345678", "12-345678", "ABCDE-678"] {
            let err = EnderecoEntrega::criar(
                cep,
                "Rua Exemplo",
                Some("Apto 101"),
                "Bairro Exemplo",
                "Estado Exemplo",
                "Cidade Exemplo",
                "Pais Exemplo",
            )
            .unwrap_err();
            assert_eq!(
                err.message(),
                "Formato de CEP inválido. O formato correto é 00000-000."
            );
        }
    }

    #[test]
    fn rejeita_campos_obrigatorios_em_branco() {
        let casos = [
            ("", "Logradouro", "Bairro", "Estado", "Cidade", "Pais", "cep"),
            ("12345-678", "", "Bairro", "Estado", "Cidade", "Pais", "logradouro"),
            ("12345-678", "Logradouro", " ", "Estado", "Cidade", "Pais", "bairro"),
            ("12345-678", "Logradouro", "Bairro", "", "Cidade", "Pais", "estado"),
            ("12345-678", "Logradouro", "Bairro", "Estado", "", "Pais", "cidade"),
            ("12345-678", "Logradouro", "Bairro", "Estado", "Cidade", "", "pais"),
        ];

        for (cep, logradouro, bairro, estado, cidade, pais, campo) in casos {
            let err = EnderecoEntrega::criar(
                cep,
                logradouro,
                Some("Complemento"),
                bairro,
                estado,
                cidade,
                pais,
            )
            .unwrap_err();
            assert_eq!(err.message(), format!("{campo} não pode ser nulo ou vazio."));
        }
    }

    #[test]
    fn enderecos_com_mesmos_valores_sao_iguais() {
        let a = criar_endereco_valido();
        let b = criar_endereco_valido();

        assert_eq!(a, b);
        assert_eq!(a.value_hash(), b.value_hash());
    }

    #[test]
    fn enderecos_divergem_quando_qualquer_campo_difere() {
        let a = criar_endereco_valido();
        let b = EnderecoEntrega::criar(
            "12345-678",
            "Rua Exemplo1",
            Some("Apto 101"),
            "Bairro Exemplo",
            "Estado Exemplo",
            "Cidade Exemplo",
            "Pais Exemplo",
        )
        .unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn complemento_ausente_e_vazio_comparam_iguais() {
        let com_none = EnderecoEntrega::criar(
            "12345-678", "Rua A", None, "Bairro", "Estado", "Cidade", "Pais",
        )
        .unwrap();
        let com_vazio = EnderecoEntrega::criar(
            "12345-678", "Rua A", Some(""), "Bairro", "Estado", "Cidade", "Pais",
        )
        .unwrap();

        assert_eq!(com_none, com_vazio);
        assert_eq!(com_none.value_hash(), com_vazio.value_hash());
    }

    #[test]
    fn formatar_completo_interpola_todos_os_campos_na_ordem_fixa() {
        let endereco = criar_endereco_valido();
        assert_eq!(
            endereco.formatar_completo(),
            "Rua Exemplo, Apto 101 - Bairro Exemplo, Cidade Exemplo - \
             Estado Exemplo, Pais Exemplo - CEP: 12345-678"
        );
    }

    mod propriedades {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every digits-only CEP in the 00000-000 shape is accepted.
            #[test]
            fn aceita_qualquer_cep_no_formato_correto(cep in "[0-9]{5}-[0-9]{3}") {
                let endereco = EnderecoEntrega::criar(
                    &cep, "Rua A", None, "Bairro", "Estado", "Cidade", "Pais",
                )
                .unwrap();
                prop_assert_eq!(endereco.cep(), cep.as_str());
            }

            /// Property: an eight-digit CEP without the hyphen is always rejected.
            #[test]
            fn rejeita_cep_sem_hifen(cep in "[0-9]{8}") {
                let err = EnderecoEntrega::criar(
                    &cep, "Rua A", None, "Bairro", "Estado", "Cidade", "Pais",
                )
                .unwrap_err();
                prop_assert_eq!(
                    err.message(),
                    "Formato de CEP inválido. O formato correto é 00000-000."
                );
            }
        }
    }
}
