#![allow(dead_code)]
#![allow(rustdoc::broken_intra_doc_links)]
//! # Expert Shell — Sistema Especialista Proposicional
//!
//! **Ponto de entrada principal** do shell de sistema especialista.
//!
//! Este arquivo é o driver interativo — um consumidor fino do núcleo:
//! popula uma [`KnowledgeStore`], constrói o [`InferenceEngine`] e o
//! [`ExplanationService`], e entra no laço de perguntas via stdin.
//! Toda a inteligência (encadeamentos, provas, explicações) vive nos
//! módulos `core`, `inference` e `explanation`.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG)
//!   ├── Interpreta a linha de comando (clap)
//!   ├── Popula a KnowledgeStore:
//!   │   ├── --base arquivo.json → loader::load_store
//!   │   └── sem argumento → base de demonstração ({A,B}→C, {C}→D)
//!   ├── Monta InferenceEngine + ExplanationService
//!   └── Laço interativo: lê linha → repl::parse → repl::answer → imprime
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Base de demonstração, logs padrão (info)
//! cargo run
//!
//! # Base própria, logs detalhados
//! RUST_LOG=debug cargo run -- --base minha_base.json
//! ```
//!
//! ## Sessão Típica
//!
//! ```text
//! Pergunte ou digite 'sair': D
//! Sim, D é verdadeiro.
//! Pergunte ou digite 'sair': porque D
//! O fato 'D' é verdadeiro porque foi inferido a partir dos fatos: [A, B, C].
//! Pergunte ou digite 'sair': sair
//! ```

// Declaração dos módulos da aplicação.
// Cada módulo corresponde a uma camada da arquitetura:

/// Módulo `core` — tipos fundamentais: Fact, Rule, KnowledgeStore.
mod core;

/// Módulo `explanation` — justificativas legíveis (porque/como).
mod explanation;

/// Módulo `inference` — motor de encadeamento (frente, trás, misto).
mod inference;

/// Módulo `loader` — bases de conhecimento declarativas em JSON.
mod loader;

/// Módulo `repl` — interpretação das consultas do usuário.
mod repl;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::core::{Fact, KnowledgeStore, Rule};
use crate::explanation::ExplanationService;
use crate::inference::InferenceEngine;
use crate::repl::Query;

/// Shell interativo de sistema especialista proposicional.
#[derive(Debug, Parser)]
#[command(name = "expert-shell", about = "Sistema especialista SE…ENTÃO com explicação porque/como")]
struct Args {
    /// Arquivo JSON com a base de conhecimento (regras + fatos dados).
    /// Sem este argumento, a base de demonstração é usada.
    #[arg(long)]
    base: Option<PathBuf>,
}

/// Base de demonstração clássica: {A,B}→C, {C}→D, fatos dados A e B.
///
/// O núcleo não tem regras nem fatos implícitos — esta base existe só
/// no driver, como amostra de uso.
fn demo_store() -> KnowledgeStore {
    let mut store = KnowledgeStore::new();
    store.add_rule(Rule::new(["A", "B"], "C"));
    store.add_rule(Rule::new(["C"], "D"));
    store.add_fact(Fact::from("A"));
    store.add_fact(Fact::from("B"));
    store
}

/// Função principal do shell.
///
/// # Erros
///
/// Retorna erro se o arquivo de base indicado em `--base` não puder ser
/// carregado, ou se o stdin/stdout falharem no laço interativo.
fn main() -> Result<()> {
    // Configura o sistema de logging/tracing.
    // Aceita a variável de ambiente RUST_LOG para configurar o nível.
    // Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Popula a store: arquivo declarativo ou base de demonstração.
    let store = match &args.base {
        Some(path) => loader::load_store(path)
            .with_context(|| format!("não foi possível carregar a base '{}'", path.display()))?,
        None => {
            tracing::info!("nenhuma base indicada, usando a base de demonstração");
            demo_store()
        }
    };
    tracing::info!(
        regras = store.rule_count(),
        fatos = store.fact_count(),
        "🧠 Expert Shell — pronto"
    );

    let mut service = ExplanationService::new(InferenceEngine::new(store));

    // Laço interativo — lê uma linha por vez, responde, repete.
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut linha = String::new();
    loop {
        write!(stdout, "Pergunte ou digite 'sair': ").context("falha ao escrever o prompt")?;
        stdout.flush().context("falha ao descarregar o stdout")?;

        linha.clear();
        let lidos = stdin
            .lock()
            .read_line(&mut linha)
            .context("falha ao ler do stdin")?;
        if lidos == 0 {
            // EOF (ex: entrada redirecionada) encerra como 'sair'.
            break;
        }

        let query = repl::parse(&linha);
        if query == Query::Exit {
            break;
        }
        let resposta = repl::answer(&query, &mut service);
        writeln!(stdout, "{resposta}").context("falha ao escrever a resposta")?;
    }

    tracing::info!("sessão encerrada");
    Ok(())
}
