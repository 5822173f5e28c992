//! Reference sampler — picks existing descriptions to steer the generator's style.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::JobCatalog;
use crate::models::job::JobField;
use crate::normalize::Normalizer;
use crate::search::field_contains;

/// Max reference descriptions handed to the generator.
pub const MAX_REFERENCES: usize = 5;

/// Selects up to `MAX_REFERENCES` descriptions related to the industry and/or
/// department.
///
/// - both terms present: rows matching either one (OR), in table order
/// - one term present: rows matching that field, in table order
/// - neither present: a uniform random sample without replacement
pub fn reference_samples<R: Rng + ?Sized>(
    catalog: &JobCatalog,
    normalizer: &Normalizer,
    industry: &str,
    department: &str,
    rng: &mut R,
) -> Vec<String> {
    let industry = normalizer.normalize_industry(industry).to_lowercase();
    let department = normalizer.normalize_department(department).to_lowercase();

    if industry.is_empty() && department.is_empty() {
        let amount = MAX_REFERENCES.min(catalog.len());
        return catalog
            .records()
            .choose_multiple(rng, amount)
            .map(|r| r.description.clone())
            .collect();
    }

    catalog
        .records()
        .iter()
        .filter(|r| {
            (!industry.is_empty() && field_contains(r, JobField::Industry, &industry))
                || (!department.is_empty() && field_contains(r, JobField::Department, &department))
        })
        .take(MAX_REFERENCES)
        .map(|r| r.description.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::search::test_support::{record, sample_catalog};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_both_terms_use_or() {
        let samples = reference_samples(
            &sample_catalog(),
            &Normalizer::new(),
            "おもちゃ",
            "HR",
            &mut rng(),
        );
        assert_eq!(samples, vec!["新商品の販促企画を実施", "採用活動の運営に関与"]);
    }

    #[test]
    fn test_industry_only() {
        let samples =
            reference_samples(&sample_catalog(), &Normalizer::new(), "製薬", "", &mut rng());
        assert_eq!(
            samples,
            vec![
                "医薬品営業チームの統括を行う",
                "医療機関への製品説明を担当",
                "中期経営計画の策定を推進",
            ]
        );
    }

    #[test]
    fn test_department_only() {
        let samples =
            reference_samples(&sample_catalog(), &Normalizer::new(), "", "工場", &mut rng());
        assert_eq!(samples, vec!["生産ラインの効率化を図る"]);
    }

    #[test]
    fn test_match_branches_truncate_in_table_order() {
        let records = (0..8)
            .map(|i| record("スタッフ", "IT", "システム", &format!("業務{i}")))
            .collect();
        let catalog = JobCatalog::from_records(records);

        let samples = reference_samples(&catalog, &Normalizer::new(), "IT", "", &mut rng());
        assert_eq!(samples, vec!["業務0", "業務1", "業務2", "業務3", "業務4"]);
    }

    #[test]
    fn test_no_terms_samples_without_replacement() {
        let catalog = sample_catalog();
        let samples = reference_samples(&catalog, &Normalizer::new(), "", "", &mut rng());

        assert_eq!(samples.len(), MAX_REFERENCES);
        let unique: HashSet<&String> = samples.iter().collect();
        assert_eq!(unique.len(), samples.len());
        for sample in &samples {
            assert!(catalog.records().iter().any(|r| &r.description == sample));
        }
    }

    #[test]
    fn test_random_sample_smaller_than_limit_takes_whole_table() {
        let catalog = JobCatalog::from_records(vec![
            record("スタッフ", "IT", "システム", "a"),
            record("管理職", "IT", "システム", "b"),
        ]);
        let samples = reference_samples(&catalog, &Normalizer::new(), "", "", &mut rng());

        let unique: HashSet<&str> = samples.iter().map(String::as_str).collect();
        assert_eq!(unique, HashSet::from(["a", "b"]));
    }

    #[test]
    fn test_random_sample_of_empty_table_is_empty() {
        let samples = reference_samples(
            &JobCatalog::default(),
            &Normalizer::new(),
            "",
            "",
            &mut rng(),
        );
        assert!(samples.is_empty());
    }
}
