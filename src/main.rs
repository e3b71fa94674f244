use std::env;
use std::path::PathBuf;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use doc_similarity::config::RunConfig;
use doc_similarity::discovery::{discover_txt_files, load_documents};
use doc_similarity::error::SimilarityError;
use doc_similarity::similarity::matrix::PairwiseMatrix;

fn main() {
    // Diagnostics go to stderr under RUST_LOG control; the report itself
    // is plain stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = RunConfig::from_args(&args);
    debug!(?config, "configuration assembled");

    if let Err(err) = run(config) {
        // Decoding and IO failures abort the comparison without partial
        // output; the failure itself is still reported.
        println!("{err}");
    }
}

fn run(mut config: RunConfig) -> Result<(), SimilarityError> {
    let dir = if config.dir.is_dir() {
        config.dir.clone()
    } else {
        println!(
            "{}. Current directory \".\" will be used instead...",
            SimilarityError::InvalidDirectory(config.dir.clone())
        );
        PathBuf::from(".")
    };

    let files = discover_txt_files(&dir)?;
    if files.is_empty() {
        println!("{}", SimilarityError::NoDocuments(dir));
        return Ok(());
    }
    if files.len() < 2 {
        // a single document has no pairs to compare
        return Ok(());
    }

    config.clamp_to(files.len());
    let selected = files[..config.doc_limit].to_vec();
    println!("Files: {:?}", selected);
    println!("N = {} K = {}", config.doc_limit, config.top_k);

    let documents = load_documents(&dir, &selected)?;
    let mut matrix = PairwiseMatrix::build(&documents)?;
    let ranking = matrix.top_k(config.top_k);
    for (rank, (score, i, j)) in ranking.list.iter().enumerate() {
        println!(
            "{}) Similarity:{:.2} \"{}\",\"{}\"",
            rank + 1,
            score,
            documents[*i].name,
            documents[*j].name
        );
    }
    Ok(())
}
