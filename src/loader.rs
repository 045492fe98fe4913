//! # Loader — Bases de Conhecimento Declarativas em JSON
//!
//! Módulo do driver para popular uma [`KnowledgeStore`] a partir de um
//! arquivo JSON declarativo, em vez de hardcodar regras no código.
//!
//! Isto **não** é uma camada de persistência: o arquivo descreve apenas a
//! configuração inicial (regras + fatos dados); fatos derivados durante a
//! sessão nunca são escritos de volta.
//!
//! ## Formato do Arquivo
//!
//! ```json
//! {
//!   "regras": [
//!     { "se": ["A", "B"], "entao": "C" },
//!     { "se": ["C"], "entao": "D" }
//!   ],
//!   "fatos": ["A", "B"]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::core::{Fact, KnowledgeStore, Rule};

/// Erros ao carregar uma base de conhecimento do disco.
///
/// Note que estes são os únicos erros "de verdade" do shell: dentro do
/// motor, "objetivo não provável" é resultado ordinário, nunca um erro.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// O arquivo não pôde ser lido.
    #[error("falha ao ler '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// O conteúdo não é um JSON válido no formato esperado.
    #[error("falha ao interpretar '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Uma regra no formato declarativo do arquivo: `{"se": [..], "entao": ".."}`.
#[derive(Debug, Deserialize)]
struct RuleSpec {
    /// Antecedentes — todos devem valer.
    se: Vec<String>,
    /// Consequente — um único átomo.
    entao: String,
}

/// Corpo de um arquivo de base de conhecimento.
#[derive(Debug, Deserialize)]
struct KnowledgeFile {
    /// Regras em ordem de declaração (a ordem importa no encadeamento
    /// para trás).
    #[serde(default)]
    regras: Vec<RuleSpec>,
    /// Fatos dados, presentes antes de qualquer inferência.
    #[serde(default)]
    fatos: Vec<String>,
}

/// Carrega um arquivo JSON e popula uma [`KnowledgeStore`] nova.
///
/// # Erros
///
/// Retorna [`LoadError`] se o arquivo não puder ser lido ou se o JSON
/// não casar com o formato esperado.
pub fn load_store(path: &Path) -> Result<KnowledgeStore, LoadError> {
    let path_display = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path_display.clone(),
        source,
    })?;
    let file: KnowledgeFile = serde_json::from_str(&json).map_err(|source| LoadError::Parse {
        path: path_display.clone(),
        source,
    })?;

    let mut store = KnowledgeStore::new();
    for spec in file.regras {
        store.add_rule(Rule::new(spec.se, spec.entao));
    }
    for fato in file.fatos {
        store.add_fact(Fact::from(fato));
    }
    tracing::info!(
        base = %path_display,
        regras = store.rule_count(),
        fatos = store.fact_count(),
        "base de conhecimento carregada"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Arquivo bem-formado popula regras e fatos na ordem declarada.
    #[test]
    fn load_well_formed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "regras": [
                    {{ "se": ["A", "B"], "entao": "C" }},
                    {{ "se": ["C"], "entao": "D" }}
                ],
                "fatos": ["A", "B"]
            }}"#
        )
        .unwrap();

        let store = load_store(file.path()).unwrap();
        assert_eq!(store.rule_count(), 2);
        assert_eq!(store.fact_count(), 2);
        assert_eq!(store.rules()[0].consequent().as_str(), "C");
        assert!(store.has_fact(&Fact::from("A")));
    }

    /// Campos ausentes valem como vazios — um arquivo `{}` é uma base vazia.
    #[test]
    fn missing_sections_default_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        let store = load_store(file.path()).unwrap();
        assert_eq!(store.rule_count(), 0);
        assert_eq!(store.fact_count(), 0);
    }

    /// JSON malformado vira LoadError::Parse, com o caminho no texto.
    #[test]
    fn malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "isto não é json").unwrap();
        let err = load_store(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    /// Arquivo inexistente vira LoadError::Io.
    #[test]
    fn missing_file_is_io_error() {
        let err = load_store(Path::new("/nao/existe/base.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
