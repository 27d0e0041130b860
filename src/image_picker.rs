use rand::Rng;

/// Street photos the app picks from when no image is given.
pub const DEFAULT_LIBRARY: [&str; 9] = [
    "https://cdn2.lamag.com/wp-content/uploads/sites/6/2019/03/third-street-promenade-people-shopping-1068x712.jpg",
    "https://images.startups.co.uk/wp-content/uploads/2007/03/How-to-open-a-shop.jpg",
    "https://images.theconversation.com/files/259534/original/file-20190218-56240-1yjwyzm.jpg?ixlib=rb-1.1.0&q=45&auto=format&w=754&fit=clip",
    "https://assets.traveltriangle.com/blog/wp-content/uploads/2018/04/Oxford-Street.jpg",
    "https://static01.nyt.com/images/2018/10/28/fashion/22STREET-TOKYO-1/merlin_145660254_4aa42037-33ca-4cf2-897b-c05cd3892438-jumbo.jpg",
    "https://neu-cdn-amnesty-org-prd.azureedge.net/cache/3/2/9/9/b/0/3299b08e47187a294c63c0c8b6dc76dac89ecef7.jpg",
    "https://www.foreground.com.au/app/uploads/2019/04/StreetTreesNoneRegentStLondon-ArthurEdelman.jpg",
    "https://vice-images.vice.com/images/content-images-crops/2016/08/24/we-asked-people-on-the-street-to-try-and-describe-their-dissertations-body-image-1472042032-size_1000.jpg?resize=640:*",
    "https://www.healthyactivebydesign.com.au/images/uploads/Case_Studies/SA/Adelaide_Design_Manual_new_2.jpg",
];

pub fn default_library() -> Vec<String> {
    DEFAULT_LIBRARY.iter().map(|s| s.to_string()).collect()
}

/// Pick an image from `library`.
///
/// The index is drawn from `0..len - 1`, so the last entry is never returned
/// once the library holds two or more images.
pub fn pick<'a, R: Rng + ?Sized>(library: &'a [String], rng: &mut R) -> Option<&'a str> {
    match library.len() {
        0 => None,
        1 => Some(library[0].as_str()),
        len => Some(library[rng.random_range(0..len - 1)].as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn never_picks_the_last_default_image() {
        let library = default_library();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..2_000 {
            let picked = pick(&library, &mut rng).unwrap();
            assert_ne!(picked, DEFAULT_LIBRARY[8]);
        }
    }

    #[test]
    fn reaches_every_other_default_image() {
        let library = default_library();
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = [false; 9];
        for _ in 0..2_000 {
            let picked = pick(&library, &mut rng).unwrap();
            let idx = DEFAULT_LIBRARY.iter().position(|s| *s == picked).unwrap();
            seen[idx] = true;
        }
        assert!(seen[..8].iter().all(|s| *s));
        assert!(!seen[8]);
    }

    #[test]
    fn small_libraries() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick(&[], &mut rng), None);
        let one = vec!["only.png".to_string()];
        assert_eq!(pick(&one, &mut rng), Some("only.png"));
        let two = vec!["a.png".to_string(), "b.png".to_string()];
        for _ in 0..50 {
            assert_eq!(pick(&two, &mut rng), Some("a.png"));
        }
    }
}
