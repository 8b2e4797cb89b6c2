pub struct SecurityStoreLoader;
