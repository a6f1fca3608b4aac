//! Randomized field value generators and fixed vocabularies.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SeedError;
use crate::sample::random_subset;

/// Property type vocabulary.
pub const PROPERTY_TYPES: &[&str] = &[
    "House",
    "Townhouse",
    "Condo",
    "Duplex",
    "Studio",
    "Villa",
    "Apartment",
    "Other",
];

/// Facility vocabulary.
pub const FACILITIES: &[&str] = &["Laundry", "Gym", "Pool", "Wifi"];

/// Curated property image pool. Early generation cycles get the image at
/// their cycle index; later cycles fall back to a random pick.
pub const PROPERTY_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1560518883-ce09059eeffa?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1570129477492-45c003edd2be?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1580587771525-78b9dba3b914?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600566753086-00f18fb6b3ea?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1613490493576-7fde63acd811?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1613977257363-707ba9348227?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1568605114967-8130f3a36994?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1583608205776-bfd35f0d9f83?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1572120360610-d971b9d7767c?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1598228723793-52759bba239c?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1605276374104-dee2a0ed3cd6?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1576941089067-2de3c901e126?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1605146769289-440113cc3d00?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600047509358-9dc75507daeb?q=80&w=800&auto=format&fit=crop",
];

/// Uniform pick from a fixed vocabulary.
pub fn pick_one<'a, R: Rng>(
    rng: &mut R,
    vocabulary: &'a [&'a str],
    name: &'static str,
) -> Result<&'a str, SeedError> {
    vocabulary
        .choose(rng)
        .copied()
        .ok_or(SeedError::EmptyVocabulary(name))
}

/// Non-empty, duplicate-free subset of the facility vocabulary, with the
/// subset size drawn uniformly from `[1, |vocabulary|]`.
pub fn facility_subset<R: Rng>(
    rng: &mut R,
    vocabulary: &[&str],
) -> Result<Vec<String>, SeedError> {
    if vocabulary.is_empty() {
        return Err(SeedError::EmptyVocabulary("facilities"));
    }

    let subset = random_subset(rng, vocabulary, 1, vocabulary.len())?;
    Ok(subset.into_iter().map(str::to_string).collect())
}

/// Uniform integer in `[low, high_exclusive)`.
pub fn bounded_int<R: Rng>(rng: &mut R, low: i64, high_exclusive: i64) -> i64 {
    rng.gen_range(low..high_exclusive)
}

/// Image for generation cycle `index`.
///
/// Cycle indices covered by the pool return the image at that position;
/// anything past the pool's last valid index falls back to a uniform
/// random pick.
pub fn select_image<R: Rng>(
    rng: &mut R,
    index: usize,
    pool: &[&str],
) -> Result<String, SeedError> {
    if pool.is_empty() {
        return Err(SeedError::EmptyVocabulary("image pool"));
    }

    if pool.len() - 1 >= index {
        Ok(pool[index].to_string())
    } else {
        Ok(pool[rng.gen_range(0..pool.len())].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_pick_one_returns_vocabulary_member() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let picked = pick_one(&mut rng, PROPERTY_TYPES, "property types").unwrap();
            assert!(PROPERTY_TYPES.contains(&picked));
        }
    }

    #[test]
    fn test_pick_one_empty_vocabulary() {
        let mut rng = StdRng::seed_from_u64(42);

        let err = pick_one(&mut rng, &[], "property types").unwrap_err();
        assert!(matches!(err, SeedError::EmptyVocabulary("property types")));
    }

    #[test]
    fn test_facility_subset_is_non_empty_and_duplicate_free() {
        let mut rng = StdRng::seed_from_u64(42);
        let vocabulary = ["Laundry", "Gym", "Pool", "Wifi"];

        for _ in 0..100 {
            let subset = facility_subset(&mut rng, &vocabulary).unwrap();
            assert!(!subset.is_empty());
            assert!(subset.len() <= vocabulary.len());

            let distinct: HashSet<&str> = subset.iter().map(String::as_str).collect();
            assert_eq!(distinct.len(), subset.len());
            assert!(subset.iter().all(|f| vocabulary.contains(&f.as_str())));
        }
    }

    #[test]
    fn test_facility_subset_empty_vocabulary() {
        let mut rng = StdRng::seed_from_u64(42);

        let err = facility_subset(&mut rng, &[]).unwrap_err();
        assert!(matches!(err, SeedError::EmptyVocabulary("facilities")));
    }

    #[test]
    fn test_bounded_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let price = bounded_int(&mut rng, 1000, 10000);
            assert!((1000..10000).contains(&price));

            let rating = bounded_int(&mut rng, 1, 6);
            assert!((1..=5).contains(&rating));
        }
    }

    #[test]
    fn test_select_image_prefers_index_inside_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = ["img0", "img1", "img2", "img3"];

        assert_eq!(select_image(&mut rng, 0, &pool).unwrap(), "img0");
        assert_eq!(select_image(&mut rng, 2, &pool).unwrap(), "img2");
        // The pool's last valid index is still an indexed pick.
        assert_eq!(select_image(&mut rng, 3, &pool).unwrap(), "img3");
    }

    #[test]
    fn test_select_image_falls_back_past_pool_end() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = ["img0", "img1", "img2"];

        for index in [3, 4, 100] {
            let image = select_image(&mut rng, index, &pool).unwrap();
            assert!(pool.contains(&image.as_str()));
        }
    }

    #[test]
    fn test_select_image_empty_pool() {
        let mut rng = StdRng::seed_from_u64(42);

        let err = select_image(&mut rng, 0, &[]).unwrap_err();
        assert!(matches!(err, SeedError::EmptyVocabulary("image pool")));
    }
}
