use doc_similarity::{rank_documents, Document};

fn main() {
    // make documents
    let documents = vec![
        Document::new("a.txt", "cat dog"),
        Document::new("b.txt", "cat dog"),
        Document::new("c.txt", "bird fish"),
    ];

    // score all pairs and take the best three
    let ranking = rank_documents(&documents, 3).unwrap();

    // print result
    println!("Ranking: \n{:#?}", ranking);
    for (rank, (score, i, j)) in ranking.list.iter().enumerate() {
        println!(
            "{}) Similarity:{:.2} \"{}\",\"{}\"",
            rank + 1,
            score,
            documents[*i].name,
            documents[*j].name
        );
    }
}
