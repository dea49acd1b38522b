use junction_core::Point;

/// The worked example from the puzzle statement: twenty junction boxes.
pub const SAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

#[must_use]
pub fn sample_points() -> Vec<Point> {
    SAMPLE
        .lines()
        .map(|line| {
            let mut coords = line.split(',').map(|raw| raw.parse::<i32>().expect("integer"));
            let mut next = || coords.next().expect("three coordinates");
            Point::new(next(), next(), next())
        })
        .collect()
}
