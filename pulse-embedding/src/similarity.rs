//! Cosine similarity calculations

use ndarray::ArrayView1;

/// Calculate cosine similarity between two embeddings
///
/// Formula: cos(θ) = (A · B) / (||A|| ||B||)
/// where:
/// - A · B is the dot product
/// - ||A|| and ||B|| are the magnitudes (L2 norms)
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "Embeddings must have same dimension (got {} and {})",
        a.len(),
        b.len()
    );

    let a_view = ArrayView1::from(a);
    let b_view = ArrayView1::from(b);

    let dot_product = a_view.dot(&b_view);
    let norm_a = a_view.dot(&a_view).sqrt();
    let norm_b = b_view.dot(&b_view).sqrt();

    // Avoid division by zero
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot_product / (norm_a * norm_b)) as f64
}
