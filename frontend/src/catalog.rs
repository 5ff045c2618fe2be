//! The course catalog and the two-axis filter over it.

use std::iter;

/// A categorical attribute a course can be filtered on.
pub trait Axis: Copy + PartialEq + 'static {
    const VALUES: &'static [Self];
    const ALL_LABEL: &'static str;
    const ALL_GLYPH: &'static str;

    fn code(self) -> &'static str;
    fn label(self) -> &'static str;
    fn glyph(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Country {
    Uk,
    Canada,
    Australia,
    Usa,
    Germany,
    Netherlands,
}

impl Axis for Country {
    const VALUES: &'static [Self] = &[
        Country::Uk,
        Country::Canada,
        Country::Australia,
        Country::Usa,
        Country::Germany,
        Country::Netherlands,
    ];
    const ALL_LABEL: &'static str = "All Countries";
    const ALL_GLYPH: &'static str = "🌍";

    fn code(self) -> &'static str {
        match self {
            Country::Uk => "uk",
            Country::Canada => "canada",
            Country::Australia => "australia",
            Country::Usa => "usa",
            Country::Germany => "germany",
            Country::Netherlands => "netherlands",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Country::Uk => "United Kingdom",
            Country::Canada => "Canada",
            Country::Australia => "Australia",
            Country::Usa => "United States",
            Country::Germany => "Germany",
            Country::Netherlands => "Netherlands",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Country::Uk => "🇬🇧",
            Country::Canada => "🇨🇦",
            Country::Australia => "🇦🇺",
            Country::Usa => "🇺🇸",
            Country::Germany => "🇩🇪",
            Country::Netherlands => "🇳🇱",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Engineering,
    Business,
    Medicine,
    It,
}

impl Axis for Field {
    const VALUES: &'static [Self] = &[Field::Engineering, Field::Business, Field::Medicine, Field::It];
    const ALL_LABEL: &'static str = "All Fields";
    const ALL_GLYPH: &'static str = "📚";

    fn code(self) -> &'static str {
        match self {
            Field::Engineering => "engineering",
            Field::Business => "business",
            Field::Medicine => "medicine",
            Field::It => "it",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Engineering => "Engineering",
            Field::Business => "Business",
            Field::Medicine => "Medicine",
            Field::It => "IT & Computer Science",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Field::Engineering => "🎓",
            Field::Business => "💼",
            Field::Medicine => "📖",
            Field::It => "💻",
        }
    }
}

/// One filter axis' current choice. `All` is the sentinel that matches
/// every course.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: Axis> Selection<T> {
    /// Every selectable value, "all" first, in display order.
    pub fn options() -> Vec<Self> {
        iter::once(Selection::All)
            .chain(T::VALUES.iter().copied().map(Selection::Only))
            .collect()
    }

    pub fn matches(self, value: T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Selection::All => "all",
            Selection::Only(value) => value.code(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Selection::All => T::ALL_LABEL,
            Selection::Only(value) => value.label(),
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Selection::All => T::ALL_GLYPH,
            Selection::Only(value) => value.glyph(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Course {
    pub title: &'static str,
    pub country: Country,
    pub field: Field,
    pub university: &'static str,
    pub duration: &'static str,
    pub rating: f32,
    pub tuition: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub static COURSES: &[Course] = &[
    Course {
        title: "Computer Science & AI",
        country: Country::Uk,
        field: Field::It,
        university: "University of Cambridge",
        duration: "3 years",
        rating: 4.9,
        tuition: "£35,000/year",
        image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=250&fit=crop",
        description: "Cutting-edge AI and machine learning programs with world-class research opportunities.",
        features: &["Research Opportunities", "Industry Partnerships", "Full Scholarships Available"],
    },
    Course {
        title: "MBA in International Business",
        country: Country::Canada,
        field: Field::Business,
        university: "University of Toronto",
        duration: "2 years",
        rating: 4.8,
        tuition: "CAD 65,000/year",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=250&fit=crop",
        description: "Global business leadership program with international exchange opportunities.",
        features: &["Global Exchange", "Industry Mentorship", "Work Placement"],
    },
    Course {
        title: "Biomedical Engineering",
        country: Country::Australia,
        field: Field::Engineering,
        university: "University of Melbourne",
        duration: "4 years",
        rating: 4.7,
        tuition: "AUD 45,000/year",
        image: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=400&h=250&fit=crop",
        description: "Innovative program combining engineering principles with medical applications.",
        features: &["Lab Access", "Research Projects", "Clinical Exposure"],
    },
    Course {
        title: "Medicine (MBBS)",
        country: Country::Uk,
        field: Field::Medicine,
        university: "Imperial College London",
        duration: "6 years",
        rating: 4.9,
        tuition: "£45,000/year",
        image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=400&h=250&fit=crop",
        description: "World-renowned medical program with extensive clinical training.",
        features: &["Clinical Training", "Research Opportunities", "Global Recognition"],
    },
    Course {
        title: "Data Science & Analytics",
        country: Country::Canada,
        field: Field::It,
        university: "University of British Columbia",
        duration: "2 years",
        rating: 4.8,
        tuition: "CAD 35,000/year",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=250&fit=crop",
        description: "Comprehensive data science program with industry partnerships.",
        features: &["Industry Projects", "Internship Guarantee", "Career Support"],
    },
    Course {
        title: "Environmental Engineering",
        country: Country::Germany,
        field: Field::Engineering,
        university: "Technical University of Munich",
        duration: "3 years",
        rating: 4.6,
        tuition: "€20,000/year",
        image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=400&h=250&fit=crop",
        description: "Sustainable engineering solutions for environmental challenges.",
        features: &["Sustainability Focus", "European Network", "Research Excellence"],
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CourseFilter {
    pub country: Selection<Country>,
    pub field: Selection<Field>,
}

impl CourseFilter {
    pub fn set_country(&mut self, country: Selection<Country>) {
        self.country = country;
    }

    pub fn set_field(&mut self, field: Selection<Field>) {
        self.field = field;
    }

    pub fn matches(&self, course: &Course) -> bool {
        self.country.matches(course.country) && self.field.matches(course.field)
    }

    /// Courses passing both axes, in catalog order. Recomputed on every
    /// call; the catalog is small enough that nothing is cached.
    pub fn apply<'a>(&self, catalog: &'a [Course]) -> Vec<&'a Course> {
        catalog.iter().filter(|course| self.matches(course)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_code<T: Axis>(code: &str) -> Option<Selection<T>> {
        Selection::<T>::options().into_iter().find(|option| option.code() == code)
    }

    fn filter(country: &str, field: &str) -> CourseFilter {
        CourseFilter {
            country: from_code(country).expect("known country code"),
            field: from_code(field).expect("known field code"),
        }
    }

    fn titles(courses: &[&Course]) -> Vec<&'static str> {
        courses.iter().map(|course| course.title).collect()
    }

    #[test]
    fn uk_and_it_finds_cambridge() {
        let visible = filter("uk", "it").apply(COURSES);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Computer Science & AI");
        assert_eq!(visible[0].university, "University of Cambridge");
    }

    #[test]
    fn all_and_all_is_the_whole_catalog_in_order() {
        let visible = CourseFilter::default().apply(COURSES);
        assert_eq!(
            titles(&visible),
            vec![
                "Computer Science & AI",
                "MBA in International Business",
                "Biomedical Engineering",
                "Medicine (MBBS)",
                "Data Science & Analytics",
                "Environmental Engineering",
            ]
        );
    }

    #[test]
    fn no_match_is_an_empty_view() {
        assert!(filter("germany", "medicine").apply(COURSES).is_empty());
        assert!(filter("netherlands", "all").apply(COURSES).is_empty());
    }

    #[test]
    fn every_selection_pair_is_a_conjunctive_filter() {
        for country in Selection::<Country>::options() {
            for field in Selection::<Field>::options() {
                let visible = CourseFilter { country, field }.apply(COURSES);

                let expected: Vec<&Course> = COURSES
                    .iter()
                    .filter(|course| {
                        (country.code() == "all" || course.country.code() == country.code())
                            && (field.code() == "all" || course.field.code() == field.code())
                    })
                    .collect();

                assert_eq!(visible, expected, "{} / {}", country.code(), field.code());
            }
        }
    }

    #[test]
    fn setters_only_touch_their_own_axis() {
        let mut filter = CourseFilter::default();
        filter.set_field(Selection::Only(Field::Engineering));
        filter.set_country(Selection::Only(Country::Germany));
        assert_eq!(filter.field, Selection::Only(Field::Engineering));
        assert_eq!(titles(&filter.apply(COURSES)), vec!["Environmental Engineering"]);

        filter.set_country(Selection::All);
        assert_eq!(filter.field, Selection::Only(Field::Engineering));
        assert_eq!(
            titles(&filter.apply(COURSES)),
            vec!["Biomedical Engineering", "Environmental Engineering"]
        );
    }

    #[test]
    fn option_lists_lead_with_the_all_sentinel() {
        let countries = Selection::<Country>::options();
        assert_eq!(countries.len(), 7);
        assert_eq!(countries[0], Selection::All);
        assert_eq!(countries[0].label(), "All Countries");
        assert_eq!(
            countries.iter().map(|c| c.code()).collect::<Vec<_>>(),
            vec!["all", "uk", "canada", "australia", "usa", "germany", "netherlands"]
        );

        let fields = Selection::<Field>::options();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0].label(), "All Fields");
        assert_eq!(fields[4].label(), "IT & Computer Science");
    }

    #[test]
    fn codes_are_unique_per_axis() {
        assert_eq!(from_code::<Country>("france"), None);
        assert_eq!(from_code::<Field>(""), None);
        assert_eq!(from_code::<Field>("it"), Some(Selection::Only(Field::It)));
        for option in Selection::<Country>::options() {
            assert_eq!(from_code::<Country>(option.code()), Some(option));
        }
    }
}
