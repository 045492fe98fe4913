//! # Motor de Inferência — Encadeamentos Sobre a KnowledgeStore
//!
//! O [`InferenceEngine`] implementa os três modos de raciocínio do shell
//! sobre uma única [`KnowledgeStore`]:
//!
//! | Modo | Direção | Pergunta que responde |
//! |------|---------|-----------------------|
//! | **Encadeamento para frente** | dados → conclusões | "O que mais consigo concluir?" |
//! | **Encadeamento para trás** | objetivo → dados | "Consigo provar X? Por qual caminho?" |
//! | **Encadeamento misto** | saturação + prova | "Sature tudo, depois prove X" |
//!
//! ## Como Funciona o Encadeamento para Frente
//!
//! Varre a sequência de regras em ordem, repetidamente; toda regra cujo
//! antecedente é subconjunto dos fatos atuais e cujo consequente ainda não
//! é fato dispara, adicionando o consequente. Repete passes completos até
//! um passe não produzir fato novo (ponto fixo).
//!
//! ```text
//! Regras: {A,B}→C   {C}→D      Fatos dados: {A, B}
//! Passe 1: {A,B}⊆{A,B} dispara → C;  {C}⊆{A,B,C} dispara → D
//! Passe 2: nada novo → ponto fixo. Fatos finais: {A, B, C, D}
//! ```
//!
//! A terminação é garantida: o conjunto de fatos é finito (limitado pelo
//! universo de consequentes declarados) e só cresce — cada passe ou
//! adiciona ≥1 fato ou encerra o laço.
//!
//! ## Como Funciona o Encadeamento para Trás
//!
//! Busca de prova em profundidade, dirigida pelo objetivo. Um objetivo já
//! conhecido prova-se sozinho; caso contrário o motor compromete-se com a
//! **primeira** regra declarada cujo consequente casa com o objetivo e
//! tenta provar recursivamente cada antecedente. Uma guarda de ciclo
//! (pilha de objetivos em andamento) corta dependências circulares como
//! `{A→B, B→A}` sem recursão infinita.
//!
//! ## Decisões de Projeto
//!
//! - **Compromisso de regra única**: se a primeira regra que casa com o
//!   objetivo falha, **nenhuma outra** regra com o mesmo consequente é
//!   tentada. É uma limitação conhecida, preservada do comportamento de
//!   referência e coberta por teste (ver
//!   `single_rule_commitment_never_tries_second_rule`).
//! - **Sem memoização**: `backward_chain` **não** adiciona o objetivo
//!   provado ao conjunto de fatos — a prova é read-only. Assim a operação
//!   `why` do serviço de explicação nunca muta estado; só `mixed_chain`
//!   (via saturação) faz o conjunto de fatos crescer.

use crate::core::{Fact, KnowledgeStore, Rule};

/// Resultado de uma busca de prova — flag de sucesso + caminho de evidência.
///
/// "Não provável" é fluxo de controle ordinário do domínio, nunca um erro:
/// consultar um fato que jamais foi declarado produz o mesmo
/// `Proof { proven: false, .. }` que qualquer outro objetivo improvável.
///
/// Quando `proven == true`, o caminho termina no próprio objetivo e cada
/// elemento é ou um fato dado ou o consequente de alguma regra cujos
/// antecedentes aparecem antes dele no caminho.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    /// O objetivo foi provado?
    pub proven: bool,
    /// Caminho de evidência, terminando no objetivo quando `proven`.
    /// Vazio ou parcial quando a prova falha.
    pub path: Vec<Fact>,
}

impl Proof {
    /// Prova bem-sucedida com o caminho de evidência dado.
    fn success(path: Vec<Fact>) -> Self {
        Self { proven: true, path }
    }

    /// Prova fracassada — caminho vazio.
    fn failure() -> Self {
        Self {
            proven: false,
            path: Vec::new(),
        }
    }

    /// O objetivo foi provado?
    pub fn is_proven(&self) -> bool {
        self.proven
    }

    /// Fatos de suporte — o caminho sem o objetivo final.
    ///
    /// Vazio quando a prova falhou ou quando o objetivo era um fato dado
    /// (caminho trivial de um elemento).
    pub fn supporting_facts(&self) -> &[Fact] {
        if self.proven && !self.path.is_empty() {
            &self.path[..self.path.len() - 1]
        } else {
            &[]
        }
    }
}

/// Motor de inferência — encadeamento para frente, para trás e misto.
///
/// Vinculado a exatamente uma [`KnowledgeStore`] na construção (o motor é
/// o dono da store; o driver acessa-a via [`store()`](InferenceEngine::store)
/// e [`store_mut()`](InferenceEngine::store_mut)). Fora da store, o motor
/// não carrega estado entre chamadas.
#[derive(Debug)]
pub struct InferenceEngine {
    store: KnowledgeStore,
}

impl InferenceEngine {
    /// Cria um motor vinculado à store dada.
    pub fn new(store: KnowledgeStore) -> Self {
        Self { store }
    }

    /// Visão read-only da store vinculada.
    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Acesso mutável à store vinculada — usado pelo driver para popular
    /// regras/fatos ou reiniciar a sessão com `clear_facts()`.
    pub fn store_mut(&mut self) -> &mut KnowledgeStore {
        &mut self.store
    }

    /// Encadeamento para frente: satura o conjunto de fatos até o ponto fixo.
    ///
    /// Dirigido pelos dados, não por um objetivo — nenhum rastro de prova é
    /// registrado. Efeito colateral: muta o conjunto de fatos da store.
    /// Retorna quantos fatos novos foram derivados nesta chamada.
    pub fn forward_chain(&mut self) -> usize {
        let mut derived = 0;
        let mut changed = true;
        while changed {
            changed = false;
            // Snapshot dos consequentes a disparar neste passe: o borrow
            // das regras impede mutar os fatos durante a varredura.
            let fired: Vec<Fact> = self
                .store
                .rules()
                .iter()
                .filter(|rule| self.applicable(rule))
                .map(|rule| rule.consequent().clone())
                .collect();
            for consequent in fired {
                if self.store.add_fact(consequent.clone()) {
                    tracing::debug!(fato = %consequent, "forward: fato derivado");
                    derived += 1;
                    changed = true;
                }
            }
        }
        tracing::debug!(derivados = derived, total = self.store.fact_count(), "forward: ponto fixo");
        derived
    }

    /// Uma regra está apta a disparar? Antecedente ⊆ fatos e consequente inédito.
    fn applicable(&self, rule: &Rule) -> bool {
        rule.antecedents().iter().all(|a| self.store.has_fact(a))
            && !self.store.has_fact(rule.consequent())
    }

    /// Encadeamento para trás: busca de prova em profundidade para `goal`.
    ///
    /// Read-only em relação à store — o objetivo provado **não** é
    /// memoizado como fato (ver decisões de projeto no doc do módulo).
    /// A profundidade de recursão é limitada pela guarda de ciclo: nenhum
    /// objetivo reaparece na pilha ativa, então a profundidade nunca excede
    /// o número de fatos distintos alcançáveis a partir do objetivo.
    pub fn backward_chain(&self, goal: &Fact) -> Proof {
        let mut active = Vec::new();
        self.prove(goal, &mut active)
    }

    /// Núcleo recursivo da prova. `active` é a pilha de objetivos em
    /// andamento (guarda de ciclo); os caminhos de evidência de cada
    /// antecedente nascem vazios e são concatenados no retorno.
    fn prove(&self, goal: &Fact, active: &mut Vec<Fact>) -> Proof {
        // Guarda de ciclo: objetivo já em prova nesta descida → falha.
        if active.contains(goal) {
            tracing::debug!(objetivo = %goal, "backward: ciclo detectado");
            return Proof::failure();
        }

        // Fato conhecido prova-se sozinho: caminho trivial de um elemento.
        if self.store.has_fact(goal) {
            return Proof::success(vec![goal.clone()]);
        }

        // Compromisso de regra única: só a PRIMEIRA regra declarada cujo
        // consequente casa com o objetivo é tentada.
        let Some(rule) = self.store.rules().iter().find(|r| r.consequent() == goal) else {
            return Proof::failure();
        };

        active.push(goal.clone());
        let mut evidence = Vec::new();
        let mut all_proven = true;
        for antecedent in rule.antecedents() {
            let sub = self.prove(antecedent, active);
            if sub.proven {
                evidence.extend(sub.path);
            } else {
                all_proven = false;
                break;
            }
        }
        active.pop();

        if all_proven {
            evidence.push(goal.clone());
            Proof::success(evidence)
        } else {
            Proof::failure()
        }
    }

    /// Encadeamento misto: satura para frente, depois prova para trás.
    ///
    /// Se a saturação já derivou o objetivo, a prova sucede trivialmente
    /// no caso base com o caminho de um elemento `[goal]`. Efeito
    /// colateral: a saturação muta o conjunto de fatos da store.
    pub fn mixed_chain(&mut self, goal: &Fact) -> Proof {
        self.forward_chain();
        self.backward_chain(goal)
    }
}
