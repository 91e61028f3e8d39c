use crate::error::SliderError;

/// Outcome of validating every container on a page.
///
/// A malformed container is set aside with its error; the rest still bind.
#[derive(Debug, Clone)]
pub struct Discovery<E> {
    pub bound: Vec<E>,
    pub rejected: Vec<SliderError>,
}

impl<E> Default for Discovery<E> {
    fn default() -> Self {
        Self {
            bound: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<E> FromIterator<Result<E, SliderError>> for Discovery<E> {
    fn from_iter<I: IntoIterator<Item = Result<E, SliderError>>>(iter: I) -> Self {
        let mut discovery = Self::default();
        for result in iter {
            match result {
                Ok(elements) => discovery.bound.push(elements),
                Err(e) => discovery.rejected.push(e),
            }
        }
        discovery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{expect_single, Role};

    /// Stand-in for a container: (overlay count, handle count)
    fn check(index: usize, overlays: u32, handles: u32) -> Result<usize, SliderError> {
        expect_single(index, Role::Overlay, overlays)?;
        expect_single(index, Role::Handle, handles)?;
        Ok(index)
    }

    #[test]
    fn test_bad_container_does_not_block_the_others() {
        let containers = [(1, 1), (1, 0), (1, 1)];
        let discovery: Discovery<usize> = containers
            .iter()
            .enumerate()
            .map(|(i, &(overlays, handles))| check(i, overlays, handles))
            .collect();

        assert_eq!(discovery.bound, vec![0, 2]);
        assert_eq!(
            discovery.rejected,
            vec![SliderError::MissingElement {
                container: 1,
                role: Role::Handle
            }]
        );
    }

    #[test]
    fn test_every_container_rejected() {
        let discovery: Discovery<usize> = vec![check(0, 2, 1), check(1, 0, 0)]
            .into_iter()
            .collect();
        assert!(discovery.bound.is_empty());
        assert_eq!(discovery.rejected.len(), 2);
        assert!(matches!(
            discovery.rejected[0],
            SliderError::DuplicateElement { count: 2, .. }
        ));
    }

    #[test]
    fn test_all_valid() {
        let discovery: Discovery<usize> = (0..3).map(|i| check(i, 1, 1)).collect();
        assert_eq!(discovery.bound, vec![0, 1, 2]);
        assert!(discovery.rejected.is_empty());
    }
}
