use log::debug;
use yew::prelude::*;

use crate::catalog::{Axis, Country, Course, CourseFilter, Field, Selection, COURSES};
use crate::hooks::use_reveal;
use crate::reveal::entrance;

#[derive(Properties, PartialEq)]
struct FilterRowProps<T: Axis> {
    title: AttrValue,
    selected: Selection<T>,
    on_select: Callback<Selection<T>>,
}

#[function_component(FilterRow)]
fn filter_row<T: Axis>(props: &FilterRowProps<T>) -> Html {
    html! {
        <div class="filter-row">
            <label>{props.title.clone()}</label>
            <div class="filter-options">
                { for Selection::<T>::options().into_iter().map(|option| {
                    let on_select = props.on_select.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(option));
                    html! {
                        <button
                            key={option.code()}
                            class={classes!("filter-option", (option == props.selected).then(|| "active"))}
                            {onclick}
                        >
                            <span class="filter-glyph">{option.glyph()}</span>
                            {option.label()}
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

fn course_card(course: &Course) -> Html {
    html! {
        <div key={course.title} class="card-premium course-card">
            <div class="course-image">
                <img src={course.image} alt={course.title} loading="lazy" />
                <div class="course-rating">{format!("⭐ {}", course.rating)}</div>
            </div>

            <div class="course-info">
                <h3>{course.title}</h3>
                <p class="muted">{course.description}</p>
                <div class="course-meta muted">
                    <span>{"📍 "}{course.university}</span>
                    <span>{"🕒 "}{course.duration}</span>
                </div>
                <div class="course-tuition">
                    <div class="tuition-amount">{course.tuition}</div>
                    <div class="muted">{"Annual Tuition"}</div>
                </div>
                <ul class="course-features">
                    { for course.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                </ul>
                <a href="#contact">
                    <button class="btn-outline">{"Learn More →"}</button>
                </a>
            </div>
        </div>
    }
}

#[function_component(CoursesSection)]
pub fn courses_section() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone());
    let filter = use_state(CourseFilter::default);

    let on_country = {
        let filter = filter.clone();
        Callback::from(move |country: Selection<Country>| {
            debug!("Country filter: {}", country.code());
            let mut next = *filter;
            next.set_country(country);
            filter.set(next);
        })
    };

    let on_field = {
        let filter = filter.clone();
        Callback::from(move |field: Selection<Field>| {
            debug!("Field filter: {}", field.code());
            let mut next = *filter;
            next.set_field(field);
            filter.set(next);
        })
    };

    let courses = filter.apply(COURSES);

    html! {
        <section id="courses" ref={section} class="courses">
            <div class="container">
                <div class={classes!(entrance("fade-in-up", 0, visible), "section-header")}>
                    <h2>
                        {"Explore "}
                        <span class="accent">{"Global Opportunities"}</span>
                    </h2>
                    <p class="muted">
                        {"Discover world-class programs from top universities across the globe. \
                          Find the perfect course that aligns with your career aspirations."}
                    </p>
                </div>

                <div class={classes!(entrance("fade-in-up", 1, visible), "course-filters")}>
                    <h3>{"⚙️ Filter Courses"}</h3>
                    <div class="filter-grid">
                        <FilterRow<Country> title="Country" selected={filter.country} on_select={on_country} />
                        <FilterRow<Field> title="Field of Study" selected={filter.field} on_select={on_field} />
                    </div>
                </div>

                <div class={classes!(entrance("fade-in-up", 2, visible), "course-grid")}>
                    {
                        if courses.is_empty() {
                            html! {
                                <p class="course-empty muted">
                                    {"No programs match these filters yet. Try another country or field."}
                                </p>
                            }
                        } else {
                            courses.iter().map(|course| course_card(course)).collect::<Html>()
                        }
                    }
                </div>

                <div class={classes!(entrance("fade-in-up", 3, visible), "courses-cta")}>
                    <h3>{"Can't Find Your Perfect Course?"}</h3>
                    <p class="muted">
                        {"Our education consultants will help you discover personalized opportunities \
                          that match your career goals and academic background."}
                    </p>
                    <a href="#contact">
                        <button class="btn-secondary">{"Get Personalized Guidance"}</button>
                    </a>
                </div>
            </div>
        </section>
    }
}
