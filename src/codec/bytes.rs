/// Join byte chunks into one contiguous buffer. Inputs are left untouched.
pub fn concat<T: AsRef<[u8]>>(chunks: &[T]) -> Vec<u8> {
    let total = chunks.iter().map(|c| c.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for chunk in chunks {
        out.extend_from_slice(chunk.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_empty() {
        let chunks: [&[u8]; 0] = [];
        assert!(concat(&chunks).is_empty());
    }

    #[test]
    fn test_concat_skips_nothing() {
        let chunks = [vec![1u8, 2], vec![], vec![3, 4]];
        assert_eq!(concat(&chunks), vec![1, 2, 3, 4]);
        assert_eq!(chunks[0], vec![1, 2]);
        assert_eq!(chunks[2], vec![3, 4]);
    }

    #[test]
    fn test_concat_mixed_sources() {
        let header = [0xAAu8; 2];
        let body = vec![0xBBu8; 3];
        assert_eq!(
            concat(&[&header[..], &body[..]]),
            vec![0xAA, 0xAA, 0xBB, 0xBB, 0xBB]
        );
    }
}
