//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os **tipos fundamentais** do shell de sistema
//! especialista. Todo o raciocínio gira em torno destes tipos:
//!
//! - [`Fact`] — Proposição atômica (ex: "chove", "rua_molhada")
//! - [`Rule`] — Implicação SE…ENTÃO sobre fatos
//! - [`KnowledgeStore`] — Contêiner central de regras e fatos
//!
//! ## Analogia com o Mundo Real
//!
//! Pense na [`KnowledgeStore`] como o **caderno de um detetive**:
//! - Cada [`Fact`] é uma **evidência anotada** — algo tido como verdadeiro
//! - Cada [`Rule`] é uma **heurística de dedução** — "se vi X e Y, concluo Z"
//! - O motor de inferência é o detetive folheando o caderno e anotando
//!   novas conclusões até nada mais poder ser concluído
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{Fact, KnowledgeStore, Rule};
//!
//! let mut store = KnowledgeStore::new();
//! store.add_rule(Rule::new(["A", "B"], "C"));
//! store.add_fact(Fact::from("A"));
//! ```

/// Sub-módulo com a implementação de [`Fact`] — proposição atômica.
pub mod fact;

/// Sub-módulo com a implementação de [`Rule`] — implicação SE…ENTÃO.
pub mod rule;

/// Sub-módulo com a implementação de [`KnowledgeStore`] — contêiner central.
pub mod knowledge_store;

// Re-exports para conveniência — permite usar `crate::core::Fact` diretamente.
pub use fact::Fact;
pub use knowledge_store::KnowledgeStore;
pub use rule::Rule;
