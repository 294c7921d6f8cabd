//! Order line item: a mutable entity with quantity/price/discount invariants.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vendas_core::{DomainResult, Entity, EntityId, EntityMeta, guard};

/// Identifier of the catalog product a line item refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProdutoId(pub EntityId);

impl ProdutoId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub fn as_uuid(&self) -> &Uuid {
        self.0.as_uuid()
    }
}

impl core::fmt::Display for ProdutoId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: order line item.
///
/// Invariant: `valor_total == preco_unitario * quantidade - desconto_aplicado`
/// after every successful operation. A failed operation leaves the item
/// unchanged. Equality is identity-based (line-item id only).
#[derive(Debug, Clone)]
pub struct ItemPedido {
    meta: EntityMeta,
    produto_id: ProdutoId,
    nome_produto: String,
    preco_unitario: Decimal,
    quantidade: u32,
    desconto_aplicado: Decimal,
    valor_total: Decimal,
}

impl ItemPedido {
    /// Factory reserved for the owning order aggregate.
    ///
    /// Line items are not constructible by arbitrary external callers; the
    /// aggregate that owns the collection creates them, so this stays
    /// crate-internal.
    pub(crate) fn novo(
        produto_id: ProdutoId,
        nome_produto: impl Into<String>,
        preco_unitario: Decimal,
        quantidade: u32,
        desconto_aplicado: Decimal,
    ) -> DomainResult<Self> {
        let nome_produto = nome_produto.into();

        guard::against_empty_guid(produto_id.as_uuid(), "produtoId")?;
        guard::against_blank(&nome_produto, "nomeProduto")?;
        guard::against(
            preco_unitario <= Decimal::ZERO,
            "O preço unitário deve ser maior que zero.",
        )?;
        guard::against(quantidade == 0, "A quantidade deve ser maior que zero.")?;

        let mut item = Self {
            meta: EntityMeta::new(),
            produto_id,
            nome_produto,
            preco_unitario,
            quantidade,
            desconto_aplicado,
            valor_total: Decimal::ZERO,
        };
        item.calcular_valor_total();
        Ok(item)
    }

    pub fn produto_id(&self) -> ProdutoId {
        self.produto_id
    }

    pub fn nome_produto(&self) -> &str {
        &self.nome_produto
    }

    pub fn preco_unitario(&self) -> Decimal {
        self.preco_unitario
    }

    pub fn quantidade(&self) -> u32 {
        self.quantidade
    }

    pub fn desconto_aplicado(&self) -> Decimal {
        self.desconto_aplicado
    }

    pub fn valor_total(&self) -> Decimal {
        self.valor_total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.meta.created_at()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.meta.updated_at()
    }

    /// Replace the applied discount.
    ///
    /// The discount may not be negative nor exceed `preco_unitario * quantidade`.
    pub fn aplicar_desconto(&mut self, desconto: Decimal) -> DomainResult<()> {
        guard::against(desconto < Decimal::ZERO, "O desconto não pode ser negativo.")?;
        guard::against(
            desconto > self.preco_unitario * Decimal::from(self.quantidade),
            "O desconto não pode ser maior que o valor total do item.",
        )?;

        self.desconto_aplicado = desconto;
        self.meta.touch();
        self.calcular_valor_total();
        Ok(())
    }

    /// Add `unidades` units to the quantity.
    pub fn adicionar_unidades(&mut self, unidades: u32) -> DomainResult<()> {
        guard::against(unidades == 0, "Deve-se adicionar pelo menos uma unidade.")?;

        self.quantidade += unidades;
        self.meta.touch();
        self.calcular_valor_total();
        Ok(())
    }

    /// Remove `unidades` units from the quantity.
    ///
    /// Removing every remaining unit is rejected: a line item must never sit at
    /// quantity zero, the owning aggregate removes it from the order instead.
    /// All checks run before any state change, so a failed removal leaves the
    /// item untouched.
    pub fn remover_unidades(&mut self, unidades: u32) -> DomainResult<()> {
        guard::against(unidades == 0, "Deve-se remover pelo menos uma unidade.")?;
        guard::against(
            unidades > self.quantidade,
            "Não é possível remover mais unidades do que as existentes no item.",
        )?;
        guard::against(
            self.quantidade - unidades == 0,
            "O item do pedido nao deve ter quantidade zero. \
             Use o metodo da classe Pedido para removê-lo",
        )?;

        self.quantidade -= unidades;
        self.meta.touch();
        self.calcular_valor_total();
        Ok(())
    }

    /// Change the unit price.
    pub fn alterar_preco_unitario(&mut self, novo_preco: Decimal) -> DomainResult<()> {
        guard::against(
            novo_preco <= Decimal::ZERO,
            "O preço unitário deve ser maior que zero.",
        )?;

        self.preco_unitario = novo_preco;
        self.meta.touch();
        self.calcular_valor_total();
        Ok(())
    }

    fn calcular_valor_total(&mut self) {
        self.valor_total =
            self.preco_unitario * Decimal::from(self.quantidade) - self.desconto_aplicado;
    }
}

impl Entity for ItemPedido {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        self.meta.id()
    }
}

// Identity-based equality: the line-item id only, never the attribute values.
impl PartialEq for ItemPedido {
    fn eq(&self, other: &Self) -> bool {
        self.meta == other.meta
    }
}

impl Eq for ItemPedido {}

impl core::hash::Hash for ItemPedido {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.meta.hash(state);
    }
}
