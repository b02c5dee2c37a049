//! Startup path: config file -> runtime -> use cases.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use linkbio_lib::bootstrap::resolve_config;
use linkbio_lib::{create_runtime, PresentationPorts};
use lb_core::ids::UserId;
use lb_core::links::Platform;
use lb_core::ports::{NavigatorPort, NotifierPort};
use lb_core::profile::{AvatarUpload, ProfileForm};
use lb_core::{Notification, Route};
use lb_infra::MemoryClipboard;

#[derive(Default)]
struct Screen {
    toasts: Mutex<Vec<String>>,
    routes: Mutex<Vec<Route>>,
}

impl NotifierPort for Screen {
    fn notify(&self, notification: Notification) {
        self.toasts.lock().unwrap().push(notification.message);
    }
}

impl NavigatorPort for Screen {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

fn presentation(screen: &Arc<Screen>) -> PresentationPorts {
    PresentationPorts {
        notifier: screen.clone(),
        navigator: screen.clone(),
        clipboard: Arc::new(MemoryClipboard::new()),
    }
}

fn tiny_png() -> Vec<u8> {
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(image::RgbImage::new(1, 1))
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

#[tokio::test]
async fn configured_runtime_saves_links_and_uploads_to_disk() {
    let blob_dir = tempfile::tempdir().unwrap();
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        config_file,
        "[preview]\nbase_url = \"https://links.example\"\n\n[storage]\nblob_dir = \"{}\"\n",
        blob_dir.path().display()
    )
    .unwrap();

    let config = resolve_config(Some(config_file.path())).unwrap();
    let screen = Arc::new(Screen::default());
    let runtime = create_runtime(config, presentation(&screen));
    runtime.auth.sign_in(UserId::from("uid-9"));

    let editor = runtime.use_cases.link_list();
    editor.add_link();
    editor.select_platform(0, Platform::GitHub).unwrap();
    editor.update_url(0, "https://github.com/nine").unwrap();
    editor.save().await.unwrap();
    assert!(editor.snapshot().rows[0].persisted);

    let profile = runtime.use_cases.profile_editor();
    profile
        .choose_avatar(AvatarUpload {
            file_name: "me.png".into(),
            content_type: "image/png".into(),
            bytes: tiny_png(),
        })
        .unwrap();
    let saved = profile
        .submit(ProfileForm {
            first_name: "Nine".into(),
            last_name: "Smith".into(),
            email: String::new(),
        })
        .await
        .unwrap();

    assert!(blob_dir.path().join("blobs/profile_images/uid-9").exists());
    assert!(saved.image_url.unwrap().starts_with("file://"));
    assert_eq!(
        runtime.use_cases.share_link().url_for(&UserId::from("uid-9")),
        "https://links.example/uid-9/preview"
    );
    assert_eq!(
        *screen.toasts.lock().unwrap(),
        vec!["Links saved successfully!", "Profile updated successfully!"]
    );
}

#[tokio::test]
async fn configured_inactivity_timeout_signs_out() {
    tokio::time::pause();
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(config_file, "[session]\ninactivity_sign_out_secs = 60\n").unwrap();

    let config = resolve_config(Some(config_file.path())).unwrap();
    let screen = Arc::new(Screen::default());
    let runtime = create_runtime(config, presentation(&screen));
    runtime.auth.sign_in(UserId::from("uid-9"));

    let session = runtime.use_cases.session();
    session.start();
    tokio::time::advance(Duration::from_secs(61)).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }

    assert_eq!(*screen.routes.lock().unwrap(), vec![Route::Login]);
    assert_eq!(
        *screen.toasts.lock().unwrap(),
        vec!["You have been signed out due to inactivity."]
    );
}
