const BEER_STYLES: [(&str, &str); 6] = [
    ("ale", "Ale is a general category of beer: You'll find sub-categories like brown ales or pale ales. This is the oldest style of beer, which dates back to antiquity. What distinguishes an ale - and also makes this category of beer accessible for home brewers - is a warm-temperature fermentation for a relatively short period of time. In the brewing process, brewers introduce top-fermenting yeasts which, as the name suggests, ferment on the top of the brew. The fermentation process turns what would otherwise be a barley and malt tea into a boozy beverage."),
    ("porter", "A type of ale, porter beers are known for their dark black color and roasted malt aroma and notes. Porters may be fruity or dry in flavor, which is determined by the variety of roasted malt used in the brewing process."),
    ("stout", "Like porters, stouts are dark, roasted ales. Stouts taste less sweet than porters and often feature a bitter coffee taste, which comes from unmalted roasted barley that is added to the wort. They are characterized by a thick, creamy head. Ireland's Guinness may be one of the world's best-known stouts."),
    ("brown ale", "Brown ales range in color from amber to brown, with chocolate, caramel, citrus, or nut notes. Brown ales are a bit of a mixed bag, since the different malts used and the country of origin can greatly affect the flavor and scent of this underrated beer style."),
    ("pale ale", "An English style of ale, pale ales and known for their copper color and fruity scent. Don't let the name fool you: these beers are strong enough to pair well with spicy foods.\n\nRelated to the pale is the APA, or American Pale Ale, which is somewhat of a hybrid between the traditional English pale ale and the IPA style. American pale ales are hoppier and usually feature American two row malt."),
    ("ipa", "Originally, India Pale Ale or IPA was a British pale ale brewed with extra hops. High levels of this bittering agent made the beer stable enough to survive the long boat trip to India without spoiling. The extra dose of hops gives IPA beers their bitter taste. Depending on the style of hops used, IPAs may have fruit-forward citrus flavors or taste of resin and pine.\n\nAmerican brewers have taken the IPA style and run with it, introducing unusual flavors and ingredients to satisfy U.S. beer drinkers' love for the brew style.")
];

/// Finds a beer's style description from the end of its name.
#[derive(Clone)]
pub struct BeerStyleMatcher {
    // Normalized keys, longest first
    styles: Vec<(String, &'static str)>
}

impl BeerStyleMatcher {
    pub fn new() -> BeerStyleMatcher {
        let mut styles: Vec<(String, &'static str)> = BEER_STYLES
            .iter()
            .map(|(style, description)| (normalize(style), *description))
            .collect();
        styles.sort_by(|(left, _), (right, _)| right.len().cmp(&left.len()));
        BeerStyleMatcher { styles }
    }

    /// Description of the longest style key the normalized name ends with, or `""`.
    pub fn match_style(&self, name: &str) -> &'static str {
        let name = normalize(name);
        self.styles
            .iter()
            .find(|(style, _)| name.ends_with(style.as_str()))
            .map(|(_, description)| *description)
            .unwrap_or("")
    }
}

impl Default for BeerStyleMatcher {
    fn default() -> Self {
        BeerStyleMatcher::new()
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
