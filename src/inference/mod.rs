//! # Módulo Inference — Motor de Inferência Proposicional
//!
//! Este módulo contém o **motor de inferência** do shell, responsável por
//! derivar novos fatos e provar objetivos sobre a
//! [`KnowledgeStore`](crate::core::KnowledgeStore) usando regras SE…ENTÃO.
//!
//! ## Analogia: O Detetive e o Caderno
//!
//! Se a store é o caderno de evidências, o motor é o **detetive**:
//! no encadeamento para frente ele folheia o caderno anotando toda
//! conclusão possível; no encadeamento para trás ele parte de uma
//! suspeita e procura o rastro de evidências que a sustenta.
//!
//! ## Modos Implementados
//!
//! | Modo | Operação | Resultado |
//! |------|----------|-----------|
//! | **Frente** | `forward_chain()` | Satura os fatos até o ponto fixo |
//! | **Trás** | `backward_chain(goal)` | [`Proof`] com caminho de evidência |
//! | **Misto** | `mixed_chain(goal)` | Saturação + prova |
//!
//! Veja [`InferenceEngine`] para detalhes.

/// Sub-módulo com o motor de encadeamentos.
pub mod engine;

/// Re-export do motor para acesso via `crate::inference::InferenceEngine`.
pub use engine::{InferenceEngine, Proof};
