use itertools::Itertools;
use pkgsize_benford::prelude::*;

const PACMAN_LOG: &str = "\
[2024-01-05T10:02:11+0100] [PACMAN] Running 'pacman -Syu'
[2024-01-05T10:02:14+0100] [PACMAN] starting full system upgrade
 linux-6.6.10.arch1-1-x86_64            133.2 MiB  10.1 MiB/s 00:13 [######################] 100%
 zlib-1:1.3.1-1-x86_64                   98.4 KiB   1.2 MiB/s 00:00 [######################] 100%
 glibc-2.39-1-x86_64                     10.2 MiB  11.5 MiB/s 00:01 [######################] 100%
 tzdata-2024a-1-x86_64                  435.6 KiB   3.3 MiB/s 00:00 [######################] 100%
[2024-01-05T10:03:02+0100] [ALPM] upgraded linux (6.6.9.arch1-1 -> 6.6.10.arch1-1)
[2024-01-05T10:03:02+0100] [ALPM] upgraded zlib (1:1.3-1 -> 1:1.3.1-1)
";

#[test]
fn end_to_end_three_packages() {
    let text = "Downloaded foo-1.0 (10 KiB) Downloaded bar-2.0 (20 KiB) Downloaded baz-3.0 (30 KiB)";
    let sizes = extract_sizes(text);
    assert_eq!(sizes, vec![10.0, 20.0, 30.0]);

    let digits: Vec<u8> = sizes.iter().map(|&s| leading_digit(s).unwrap()).collect();
    assert_eq!(digits, vec![1, 2, 3]);

    let rows = analyze_benford(&sizes).unwrap().as_tuples();
    for (digit, observed, expected) in rows {
        let want = if digit <= 3 { 33.3 } else { 0.0 };
        assert!(
            (observed - want).abs() < 0.05,
            "digit {digit}: observed {observed}"
        );
        assert_eq!(Some(expected), expected_percent(digit));
    }
}

#[test]
fn text_without_sizes_surfaces_empty_input() {
    let sizes = extract_sizes("[ALPM] transaction started\n[ALPM] transaction completed");
    assert!(sizes.is_empty());
    assert_eq!(analyze_benford(&sizes), Err(BenfordError::EmptyInput));
}

#[test]
fn pacman_download_lines_with_rates() {
    let sizes = extract_sizes(PACMAN_LOG);
    assert_eq!(sizes.len(), 8);

    let extractor = SizeExtractor::new(ExtractorSettings::new().with_skip_transfer_rates(true));
    let sizes = extractor.extract(PACMAN_LOG);
    assert_eq!(sizes, vec![133.2 * 1024.0, 98.4, 10.2 * 1024.0, 435.6]);

    let digits = sizes
        .iter()
        .map(|&s| leading_digit(s).unwrap())
        .collect_vec();
    // 136396.8, 98.4, 10444.8, 435.6
    assert_eq!(digits, vec![1, 9, 1, 4]);

    let analysis = analyze_benford(&sizes).unwrap();
    assert_eq!(analysis.total(), 4);
    assert_eq!(analysis.digit(1).unwrap().observed_percent, 50.0);

    let ranges = analyze_size_ranges(&sizes, &DEFAULT_SIZE_RANGES).unwrap();
    let counts = ranges.iter().map(RangeAnalysis::count).collect_vec();
    assert_eq!(counts, vec![1, 1, 0, 2]);
}

#[test]
fn chi_square_on_extracted_sizes() {
    let sizes = extract_sizes("1 KiB 1 KiB 2 KiB 3 KiB 1 MiB");
    let analysis = analyze_benford(&sizes).unwrap();
    let test = chi_square_test(&analysis);

    assert_eq!(test.degrees_of_freedom, 8);
    assert_eq!(test.verdict, FitVerdict::Good);
    assert!(test.statistic > 0.0);
}
