//! Vector primitives: accumulate, normalize, compare

use crate::core::error::DomainError;
use crate::profile::ProfileVector;
use crate::quiz::Question;

/// Add the weights of `choice` to `accumulator`.
///
/// Returns the updated accumulator as a new value; the input is untouched,
/// so on `UnknownAnswerChoice` the caller still holds the previous state.
pub fn apply_answer(
    accumulator: &ProfileVector,
    question: &Question,
    choice: &str,
) -> Result<ProfileVector, DomainError> {
    let weights = question
        .answer_weights()
        .weights_for(choice)
        .ok_or_else(|| DomainError::UnknownAnswerChoice {
            choice: choice.to_string(),
            valid: question.choice_labels(),
        })?;

    Ok(*accumulator + *weights)
}

/// Scale `vector` to unit length.
///
/// The vector is first divided by its largest absolute component, so any
/// finite non-zero input normalizes correctly however large or small its
/// values are.
///
/// # Errors
/// - `NonFiniteComponent` if a component is NaN or infinite
/// - `ZeroVectorNormalization` if every component is zero
pub fn normalize(vector: &ProfileVector) -> Result<ProfileVector, DomainError> {
    if let Some((dimension, value)) = vector.non_finite_component() {
        return Err(DomainError::NonFiniteComponent { dimension, value });
    }

    let scale = vector.max_abs();
    if scale == 0.0 {
        return Err(DomainError::ZeroVectorNormalization);
    }

    // Largest component is now +/-1, so the norm lies in [1, sqrt(5)]
    let bounded = vector.divided(scale);
    Ok(bounded.divided(bounded.magnitude()))
}

/// Dot product of two vectors.
///
/// For unit vectors this is the cosine similarity. No clamping is applied.
pub fn similarity(a: &ProfileVector, b: &ProfileVector) -> f64 {
    a.dot(b)
}
