//! # Explicação — Justificativas Legíveis Para Porque/Como
//!
//! O [`ExplanationService`] transforma os resultados do motor de inferência
//! em **frases de justificativa** em PT-BR, prontas para exibição pelo
//! driver. É a resposta do shell às perguntas clássicas de um sistema
//! especialista:
//!
//! | Pergunta | Operação | Raciocínio invocado |
//! |----------|----------|---------------------|
//! | "**porque** X?" | [`why`](ExplanationService::why) | Encadeamento para trás |
//! | "**como** X?" | [`how`](ExplanationService::how) | Encadeamento misto |
//!
//! ## Efeitos Colaterais
//!
//! - `why` é **read-only**: o encadeamento para trás deste shell não
//!   memoiza objetivos provados, então explicar nunca muta a store.
//! - `how` **muta** a store: o encadeamento misto satura os fatos antes
//!   de provar. É um efeito documentado da operação — quem pergunta
//!   "como" aceita que o shell raciocine até o ponto fixo.
//!
//! ## Exemplo de Saída
//!
//! ```text
//! O fato 'D' é verdadeiro porque foi inferido a partir dos fatos: [A, B, C].
//! O fato 'D' foi inferido através do seguinte caminho lógico: [D].
//! ```

use crate::core::Fact;
use crate::inference::InferenceEngine;

/// Serviço de explicação — vinculado a exatamente um [`InferenceEngine`].
///
/// O serviço é o dono do motor (e, transitivamente, da store); o driver
/// acessa ambos via [`engine()`](ExplanationService::engine) e
/// [`engine_mut()`](ExplanationService::engine_mut).
#[derive(Debug)]
pub struct ExplanationService {
    engine: InferenceEngine,
}

impl ExplanationService {
    /// Cria o serviço vinculado ao motor dado.
    pub fn new(engine: InferenceEngine) -> Self {
        Self { engine }
    }

    /// Visão read-only do motor vinculado.
    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    /// Acesso mutável ao motor — usado pelo driver para saturar ou
    /// popular a store.
    pub fn engine_mut(&mut self) -> &mut InferenceEngine {
        &mut self.engine
    }

    /// Explica **por que** um fato vale, via encadeamento para trás.
    ///
    /// Sucesso: frase nomeando o fato e listando os fatos de suporte
    /// (o caminho de prova sem o próprio objetivo). Falha: frase dizendo
    /// que o fato não pôde ser provado. Nunca muta a store.
    pub fn why(&self, fact: &Fact) -> String {
        let proof = self.engine.backward_chain(fact);
        if proof.is_proven() {
            format!(
                "O fato '{fact}' é verdadeiro porque foi inferido a partir dos fatos: {}.",
                render_path(proof.supporting_facts())
            )
        } else {
            format!("O fato '{fact}' não pôde ser provado.")
        }
    }

    /// Explica **como** um fato foi inferido, via encadeamento misto.
    ///
    /// A saturação para frente pode já ter derivado o objetivo — nesse
    /// caso o caminho é o trivial `[fato]`. Efeito colateral documentado:
    /// a saturação faz o conjunto de fatos da store crescer.
    pub fn how(&mut self, fact: &Fact) -> String {
        let proof = self.engine.mixed_chain(fact);
        if proof.is_proven() {
            format!(
                "O fato '{fact}' foi inferido através do seguinte caminho lógico: {}.",
                render_path(&proof.path)
            )
        } else {
            format!("Não há um caminho claro para inferir '{fact}'.")
        }
    }
}

/// Formata um caminho de prova como `[A, B, C]`.
fn render_path(path: &[Fact]) -> String {
    let simbolos: Vec<&str> = path.iter().map(Fact::as_str).collect();
    format!("[{}]", simbolos.join(", "))
}
