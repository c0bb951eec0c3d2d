//! Profile card for the looked-up user.

use crate::features::user_search::logic::{blog_href, compact_count, display_name, joined_label};
use gitseek_api_models::UserProfile;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct UserCardProps {
    pub user: UserProfile,
    #[prop_or_default]
    pub refreshing: bool,
}

#[function_component(UserCard)]
pub(crate) fn user_card(props: &UserCardProps) -> Html {
    let user = &props.user;
    let name = display_name(user).to_string();
    let detail = |label: &'static str, value: Option<String>| {
        value
            .filter(|value| !value.trim().is_empty())
            .map(|value| html! { <li><span class="muted">{label}</span>{" "}{value}</li> })
            .unwrap_or_default()
    };

    html! {
        <div class={classes!("user-card", props.refreshing.then_some("refreshing"))}>
            <img class="avatar" src={user.avatar_url.clone()} alt={user.login.clone()} />
            <h2>{name}</h2>
            <a href={user.html_url.clone()} target="_blank" rel="noopener noreferrer">
                {format!("@{}", user.login)}
            </a>
            {user.bio.clone().map(|bio| html! { <p class="bio">{bio}</p> }).unwrap_or_default()}
            <ul class="details">
                {detail("Location", user.location.clone())}
                {detail("Company", user.company.clone())}
                {joined_label(user.created_at).map(|label| html! { <li>{label}</li> }).unwrap_or_default()}
            </ul>
            {blog_href(user.blog.as_deref()).map(|href| html! {
                <a class="blog" href={href.clone()} target="_blank" rel="noopener noreferrer">{href}</a>
            }).unwrap_or_default()}
            <div class="stats">
                <span><strong>{compact_count(user.followers)}</strong>{" followers"}</span>
                <span><strong>{compact_count(user.following)}</strong>{" following"}</span>
                <span><strong>{compact_count(user.public_repos)}</strong>{" repos"}</span>
            </div>
        </div>
    }
}
