//! # REPL — Interpretação das Consultas do Usuário
//!
//! Camada fina entre o stdin e o núcleo: interpreta cada linha digitada
//! como uma [`Query`] e produz a resposta textual correspondente. O laço
//! interativo em si (prompt, leitura, impressão) vive em `main.rs`; aqui
//! fica só a parte pura e testável.
//!
//! ## Gramática das Consultas
//!
//! | Entrada | Interpretação |
//! |---------|---------------|
//! | `sair` | Encerra o laço interativo |
//! | `porque X` | Explica por que X vale (encadeamento para trás) |
//! | `como X` | Explica como X foi inferido (encadeamento misto) |
//! | `X` | Satura e verifica se X é um fato conhecido |
//!
//! A consulta simples (último caso) roda `forward_chain()` antes da
//! verificação de pertinência — igual ao driver de referência — então
//! perguntar por um fato derivável responde "Sim" mesmo sem ninguém
//! ter pedido a saturação explicitamente.

use crate::core::Fact;
use crate::explanation::ExplanationService;

/// Token sentinela que encerra o laço interativo.
const EXIT_TOKEN: &str = "sair";

/// Prefixo da consulta "por que este fato vale?".
const WHY_PREFIX: &str = "porque ";

/// Prefixo da consulta "como este fato foi inferido?".
const HOW_PREFIX: &str = "como ";

/// Consulta interpretada a partir de uma linha do usuário.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Encerrar o laço interativo.
    Exit,
    /// `porque X` — pedir a justificativa de X.
    Why(Fact),
    /// `como X` — pedir o caminho de inferência de X.
    How(Fact),
    /// Texto puro — verificar se X é um fato (após saturação).
    Ask(Fact),
}

/// Interpreta uma linha de entrada como consulta.
///
/// A linha é aparada nas pontas; o token de saída é case-insensitive
/// ("sair", "SAIR", "Sair" encerram igualmente). Os prefixos `porque `
/// e `como ` são reconhecidos em minúsculas, como no driver de referência.
pub fn parse(input: &str) -> Query {
    let input = input.trim();
    if input.eq_ignore_ascii_case(EXIT_TOKEN) {
        Query::Exit
    } else if let Some(fato) = input.strip_prefix(WHY_PREFIX) {
        Query::Why(Fact::from(fato))
    } else if let Some(fato) = input.strip_prefix(HOW_PREFIX) {
        Query::How(Fact::from(fato))
    } else {
        Query::Ask(Fact::from(input))
    }
}

/// Responde uma consulta (exceto [`Query::Exit`], que o laço trata).
///
/// A consulta simples satura a store antes da verificação de
/// pertinência — efeito colateral herdado do driver de referência.
pub fn answer(query: &Query, service: &mut ExplanationService) -> String {
    match query {
        Query::Exit => String::new(),
        Query::Why(fato) => service.why(fato),
        Query::How(fato) => service.how(fato),
        Query::Ask(fato) => {
            service.engine_mut().forward_chain();
            if service.engine().store().has_fact(fato) {
                format!("Sim, {fato} é verdadeiro.")
            } else {
                format!("Não sei dizer se {fato} é verdadeiro.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KnowledgeStore, Rule};
    use crate::inference::InferenceEngine;

    fn classic_service() -> ExplanationService {
        let mut store = KnowledgeStore::new();
        store.add_rule(Rule::new(["A", "B"], "C"));
        store.add_rule(Rule::new(["C"], "D"));
        store.add_fact(Fact::from("A"));
        store.add_fact(Fact::from("B"));
        ExplanationService::new(InferenceEngine::new(store))
    }

    #[test]
    fn parse_exit_is_case_insensitive() {
        assert_eq!(parse("sair"), Query::Exit);
        assert_eq!(parse("  SAIR  "), Query::Exit);
    }

    #[test]
    fn parse_why_and_how_prefixes() {
        assert_eq!(parse("porque D"), Query::Why(Fact::from("D")));
        assert_eq!(parse("como D"), Query::How(Fact::from("D")));
    }

    #[test]
    fn parse_plain_text_is_ask() {
        assert_eq!(parse(" D "), Query::Ask(Fact::from("D")));
    }

    /// Consulta simples de fato derivável: satura e responde "Sim".
    #[test]
    fn ask_derivable_fact_answers_yes() {
        let mut service = classic_service();
        let resposta = answer(&parse("D"), &mut service);
        assert_eq!(resposta, "Sim, D é verdadeiro.");
    }

    /// Fato desconhecido: "não sei dizer", nunca um erro.
    #[test]
    fn ask_unknown_fact_answers_unknown() {
        let mut service = classic_service();
        let resposta = answer(&parse("E"), &mut service);
        assert_eq!(resposta, "Não sei dizer se E é verdadeiro.");
    }

    /// Roteiro ponta a ponta do exemplo clássico.
    #[test]
    fn classic_session_end_to_end() {
        let mut service = classic_service();
        assert_eq!(
            answer(&parse("porque D"), &mut service),
            "O fato 'D' é verdadeiro porque foi inferido a partir dos fatos: [A, B, C]."
        );
        assert_eq!(
            answer(&parse("como D"), &mut service),
            "O fato 'D' foi inferido através do seguinte caminho lógico: [D]."
        );
        assert_eq!(answer(&parse("D"), &mut service), "Sim, D é verdadeiro.");
    }
}
